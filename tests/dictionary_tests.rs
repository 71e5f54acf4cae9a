use cedict::{parse_dictionary, parse_entry, Dictionary, ErrorType, OnError, Options, Parser};
use std::io::{self, Read};

const DATA_LINES: [&str; 10] = [
    "栗斑腹鵐 栗斑腹鹀 [li4 ban1 fu4 wu2] /(bird species of China) Jankowski's bunting (Emberiza jankowskii)/",
    "粉轉黑 粉转黑 [fen3 zhuan3 hei1] /(Internet slang) to go from being an admirer to being a detractor/",
    "震源機制 震源机制 [zhen4 yuan2 ji1 zhi4] /focal mechanism of earthquake/",
    "道孚縣 道孚县 [Dao4 fu2 xian4] /Dawu county (Tibetan: rta 'u rdzong) in Garze Tibetan autonomous prefecture 甘孜藏族自治州[Gan1 zi1 Zang4 zu2 zi4 zhi4 zhou1], Sichuan (formerly in Kham province of Tibet)/",
    "心醉 心醉 [xin1 zui4] /enchanted/fascinated/charmed/",
    "膠印 胶印 [jiao1 yin4] /offset printing/",
    "夯砣 夯砣 [hang1 tuo2] /rammer/tamper/",
    "明理 明理 [ming2 li3] /sensible/reasonable/an obvious reason, truth or fact/to understand the reason or reasoning/",
    "少安毋躁 少安毋躁 [shao3 an1 wu2 zao4] /keep calm, don't get excited/don't be impatient/",
    "興山縣 兴山县 [Xing1 shan1 xian4] /Xingshan county in Yichang 宜昌[Yi2 chang1], Hubei/",
];

fn sample(lines: &[&str]) -> String {
    let mut text = String::from(
        "# CC-CEDICT\n# Community maintained free Chinese-English dictionary.\n",
    );
    for line in lines {
        text.push_str(line);
        text.push('\n');
    }
    text
}

struct FailingReader {
    data: &'static [u8],
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.data.is_empty() {
            return Err(io::Error::new(io::ErrorKind::Other, "disk on fire"));
        }
        let n = std::cmp::min(buf.len(), self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

#[test]
fn parse_ten_entries_in_order() {
    let dict = parse_dictionary(sample(&DATA_LINES).as_bytes()).unwrap();
    assert_eq!(dict.len(), 10);
    for (entry, line) in dict.iter().zip(DATA_LINES.iter()) {
        assert_eq!(entry, &parse_entry(line).unwrap());
    }
    assert_eq!(dict[3].pinyin(), "dao4 fu2 xian4");
    assert_eq!(dict[9].traditional(), "興山縣");
}

#[test]
fn abort_on_malformed_line() {
    let mut lines = DATA_LINES;
    lines[4] = "心醉 心醉 xin1 zui4 /enchanted/";
    let err = parse_dictionary(sample(&lines).as_bytes()).unwrap_err();
    assert_eq!(err.r#type, ErrorType::MalformedLine);
    assert_eq!(err.raw, lines[4]);
    // Two comment lines precede the data.
    assert_eq!(err.src.line, 7);
    assert!(!err.is_io());
}

#[test]
fn skip_malformed_line() {
    let mut lines = DATA_LINES;
    lines[4] = "心醉 心醉 [xin1 zui4] / /";
    let parser = Parser::new(Options {
        on_error: OnError::Skip,
        ..Default::default()
    });
    let (dict, errors) = parser.parse(sample(&lines).as_bytes()).unwrap();
    assert_eq!(dict.len(), 9);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].r#type, ErrorType::EmptyDefinitions);
    assert_eq!(dict[4].simplified(), "胶印");
}

#[test]
fn read_failure_is_distinct() {
    let reader = FailingReader {
        data: "心醉 心醉 [xin1 zui4] /enchanted/\n".as_bytes(),
    };
    let err = parse_dictionary(reader).unwrap_err();
    assert_eq!(err.r#type, ErrorType::Io);
    assert!(err.is_io());
    assert!(err.raw.is_empty());
}

#[test]
fn read_failure_is_fatal_in_skip_mode() {
    let reader = FailingReader { data: b"" };
    let parser = Parser::new(Options {
        on_error: OnError::Skip,
        ..Default::default()
    });
    assert!(parser.parse(reader).unwrap_err().is_io());
}

#[test]
fn caller_keeps_the_stream() {
    let text = sample(&DATA_LINES[..2]);
    let mut cursor = io::Cursor::new(text.into_bytes());
    let dict = Dictionary::from_reader(&mut cursor).unwrap();
    assert_eq!(dict.len(), 2);
    assert_eq!(cursor.position() as usize, cursor.get_ref().len());
}

#[test]
fn empty_stream() {
    let dict = parse_dictionary(io::empty()).unwrap();
    assert!(dict.is_empty());
}

#[test]
fn display_and_lookup() {
    let dict = parse_dictionary(sample(&DATA_LINES).as_bytes()).unwrap();
    let found: Vec<String> = dict.lookup("膠印").map(|e| e.to_string()).collect();
    assert_eq!(found, vec!["胶印\tjiao1 yin4\toffset printing"]);
    assert_eq!(dict.lookup("胶印").count(), 1);
    assert_eq!(dict.lookup("猫").count(), 0);
    let owned: Vec<_> = dict.clone().into_iter().collect();
    assert_eq!(&owned, dict.entries());
}

#[test]
fn missing_file() {
    let err = Dictionary::from_file("/nonexistent/cedict_ts.u8", Options::default()).unwrap_err();
    assert!(err.is_io());
    assert_eq!(
        err.src.file.as_deref().map(String::as_str),
        Some("/nonexistent/cedict_ts.u8")
    );
}

#[test]
fn error_display_names_the_line() {
    let err = parse_dictionary("# header\nbroken line\n".as_bytes()).unwrap_err();
    let text = err.to_string();
    assert!(text.starts_with("MalformedLine: Parsing line 2:"));
    assert!(text.ends_with("\n  broken line"));
}

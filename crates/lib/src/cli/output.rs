use core::fmt;
use std::io::{self, Write};

use serde::Serialize;

use crate::cli::Answer;

pub(crate) struct Output<O> {
    out: O,
    kind: OutputKind,
}

pub(crate) enum OutputKind {
    Json,
    Normal,
}

impl<O> Output<O>
where
    O: Write,
{
    pub(crate) fn new(out: O, kind: OutputKind) -> Self {
        Self { out, kind }
    }

    /// Errors only go to the output in JSON mode, otherwise they are reported
    /// on stderr when they are returned from `main`.
    pub(crate) fn error(&mut self, m: impl fmt::Display) -> io::Result<()> {
        match &self.kind {
            OutputKind::Json => self.json(&Line {
                ty: LineType::Message,
                data: Message {
                    output: m,
                    kind: MessageKind::Error,
                },
            }),
            OutputKind::Normal => Ok(()),
        }
    }

    pub(crate) fn answer(&mut self, answer: &Answer) -> io::Result<()> {
        match &self.kind {
            OutputKind::Json => {
                self.json(&Line {
                    ty: LineType::Answer,
                    data: answer,
                })?;
            }
            OutputKind::Normal => {
                writeln!(self.out, "{}", answer.value)?;
            }
        }

        self.out.flush()
    }

    fn json<T>(&mut self, m: &T) -> io::Result<()>
    where
        T: Serialize,
    {
        serde_json::to_writer(&mut self.out, m)?;
        writeln!(self.out)?;
        Ok(())
    }
}

#[derive(Serialize)]
struct Line<T> {
    #[serde(rename = "type")]
    ty: LineType,
    data: T,
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
enum LineType {
    Message,
    Answer,
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
enum MessageKind {
    Error,
}

struct Message<T> {
    output: T,
    kind: MessageKind,
}

impl<T> Serialize for Message<T>
where
    T: fmt::Display,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("kind", &self.kind)?;
        map.serialize_entry("output", &DisplayString(&self.output))?;
        map.end()
    }
}

struct DisplayString<T>(T);

impl<T> Serialize for DisplayString<T>
where
    T: fmt::Display,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{Output, OutputKind};
    use crate::cli::Answer;

    fn answer() -> Answer {
        Answer {
            value: String::from("4361"),
        }
    }

    #[test]
    fn test_normal() {
        let mut o = Output::new(Vec::new(), OutputKind::Normal);
        o.answer(&answer()).unwrap();
        o.error("ignored").unwrap();
        assert_eq!(o.out, b"4361\n");
    }

    #[test]
    fn test_json() {
        let mut o = Output::new(Vec::new(), OutputKind::Json);
        o.error(format_args!("{}:{}: bad", "<stdin>", 1)).unwrap();
        o.answer(&answer()).unwrap();

        let out = String::from_utf8(o.out).unwrap();
        let mut lines = out.lines();

        assert_eq!(
            lines.next(),
            Some(r#"{"type":"message","data":{"kind":"error","output":"<stdin>:1: bad"}}"#)
        );
        assert_eq!(
            lines.next(),
            Some(r#"{"type":"answer","data":{"value":"4361"}}"#)
        );
        assert_eq!(lines.next(), None);
    }
}

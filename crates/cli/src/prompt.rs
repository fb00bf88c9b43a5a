//! Line-oriented prompts over any reader/writer pair.

use content_core::models::{non_blank, split_list};
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use thiserror::Error;

pub const REQUIRED_MESSAGE: &str = "This field is required.";

#[derive(Debug, Error)]
pub enum PromptError {
    /// The input stream ended before an answer was given.
    #[error("input closed before an answer was given")]
    Closed,
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    pub fn say(&mut self, line: &str) -> Result<(), PromptError> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Writes `prompt` without a newline and returns the next line, trimmed.
    pub fn read_line(&mut self, prompt: &str) -> Result<String, PromptError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed);
        }
        Ok(line.trim().to_string())
    }

    /// Asks for `label`; a required field is asked again until non-blank.
    pub fn ask(&mut self, label: &str, required: bool) -> Result<String, PromptError> {
        let prompt = format!("{}: ", label);
        loop {
            let value = self.read_line(&prompt)?;
            if !value.is_empty() || !required {
                return Ok(value);
            }
            self.say(REQUIRED_MESSAGE)?;
        }
    }

    pub fn ask_optional(&mut self, label: &str) -> Result<Option<String>, PromptError> {
        Ok(non_blank(&self.ask(label, false)?))
    }

    /// Required comma-separated field.
    pub fn ask_list(&mut self, label: &str) -> Result<Vec<String>, PromptError> {
        Ok(split_list(&self.ask(label, true)?))
    }

    /// Required field that must parse as `T`; prints `complaint` and asks
    /// again on every rejected value.
    pub fn ask_parsed<T: FromStr>(
        &mut self,
        label: &str,
        complaint: &str,
    ) -> Result<T, PromptError> {
        loop {
            let value = self.ask(label, true)?;
            match value.parse() {
                Ok(parsed) => return Ok(parsed),
                Err(_) => self.say(complaint)?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use content_core::models::Visibility;
    use std::io::Cursor;

    fn prompter(script: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    fn output(p: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_inner().1).unwrap()
    }

    #[test]
    fn required_field_reprompts_until_filled() {
        let mut p = prompter("\n   \n  Dune  \n");
        assert_eq!(p.ask("Title", true).unwrap(), "Dune");
        let out = output(p);
        assert_eq!(out.matches("Title: ").count(), 3);
        assert_eq!(out.matches(REQUIRED_MESSAGE).count(), 2);
    }

    #[test]
    fn optional_field_accepts_blank() {
        let mut p = prompter("   \n");
        assert_eq!(p.ask_optional("ISBN (optional)").unwrap(), None);
        assert!(!output(p).contains(REQUIRED_MESSAGE));
    }

    #[test]
    fn list_field_is_split_and_trimmed() {
        let mut p = prompter("a, b ,c\n");
        assert_eq!(p.ask_list("Tags (comma separated)").unwrap(), ["a", "b", "c"]);
    }

    #[test]
    fn parsed_field_complains_on_each_bad_value() {
        let mut p = prompter("shared\nnobody\nPublic\n");
        let v: Visibility = p.ask_parsed("Visibility (public/private)", "nope").unwrap();
        assert_eq!(v, Visibility::Public);
        assert_eq!(output(p).matches("nope\n").count(), 2);
    }

    #[test]
    fn end_of_input_is_not_a_blank_answer() {
        let mut p = prompter("\n");
        assert!(matches!(p.ask("Title", true), Err(PromptError::Closed)));
        let mut p = prompter("");
        assert!(matches!(p.ask("Link (optional)", false), Err(PromptError::Closed)));
    }
}

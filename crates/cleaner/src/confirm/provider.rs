//! Providers — where the operator's answer comes from.

use std::collections::VecDeque;
use std::future::Future;
use std::io;
use std::pin::Pin;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Stdin};

pub type AnswerFuture<'a> = Pin<Box<dyn Future<Output = io::Result<Option<String>>> + Send + 'a>>;

/// Shows a prompt and returns one line of answer, or `None` at end of input.
///
/// The returned line has its line terminator removed and nothing else.
pub trait ConfirmOps: Send {
    fn ask<'a>(&'a mut self, prompt: &'a str) -> AnswerFuture<'a>;
}

/// Strip a trailing `\n` or `\r\n`.
fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

// ── Stdin ───────────────────────────────────────────────────────

/// Production provider: prompt on stdout, answer from stdin.
pub struct StdinConfirm {
    reader: BufReader<Stdin>,
}

impl StdinConfirm {
    pub fn new() -> Self {
        Self {
            reader: BufReader::new(tokio::io::stdin()),
        }
    }

    async fn read_answer(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(prompt.as_bytes()).await?;
        stdout.flush().await?;

        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        Ok(Some(strip_line_ending(line)))
    }
}

impl Default for StdinConfirm {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfirmOps for StdinConfirm {
    fn ask<'a>(&'a mut self, prompt: &'a str) -> AnswerFuture<'a> {
        Box::pin(self.read_answer(prompt))
    }
}

// ── Scripted ────────────────────────────────────────────────────

/// Test provider: replays canned answers and remembers every prompt shown.
#[derive(Debug, Default)]
pub struct ScriptedConfirm {
    answers: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedConfirm {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl ConfirmOps for ScriptedConfirm {
    fn ask<'a>(&'a mut self, prompt: &'a str) -> AnswerFuture<'a> {
        self.prompts.push(prompt.to_string());
        let answer = self.answers.pop_front().map(strip_line_ending);
        Box::pin(async move { Ok(answer) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_line_ending() {
        assert_eq!(strip_line_ending("yes\n".into()), "yes");
        assert_eq!(strip_line_ending("yes\r\n".into()), "yes");
        assert_eq!(strip_line_ending("yes".into()), "yes");
        assert_eq!(strip_line_ending(" yes \n".into()), " yes ");
        assert_eq!(strip_line_ending("\n".into()), "");
    }

    #[tokio::test]
    async fn test_scripted_replays_then_runs_dry() {
        let mut provider = ScriptedConfirm::new(["yes\n", "no"]);
        assert_eq!(provider.ask("first?").await.unwrap().as_deref(), Some("yes"));
        assert_eq!(provider.ask("second?").await.unwrap().as_deref(), Some("no"));
        assert_eq!(provider.ask("third?").await.unwrap(), None);
        assert_eq!(provider.prompts(), &["first?", "second?", "third?"]);
    }
}

//! 交互输入能力 - 业务能力层

use async_trait::async_trait;
use std::collections::VecDeque;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader, Stdin};

use crate::error::{AppError, AppResult};

/// 单行阻塞式提问
#[async_trait]
pub trait Prompt: Send {
    async fn ask(&mut self, text: &str) -> AppResult<String>;

    /// 询问不应回显的内容（密码）
    async fn ask_secret(&mut self, text: &str) -> AppResult<String> {
        self.ask(text).await
    }
}

/// 从标准输入读取回答
pub struct StdinPrompt {
    reader: BufReader<Stdin>,
}

impl StdinPrompt {
    pub fn new() -> Self {
        Self {
            reader: BufReader::new(tokio::io::stdin()),
        }
    }
}

impl Default for StdinPrompt {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Prompt for StdinPrompt {
    async fn ask(&mut self, text: &str) -> AppResult<String> {
        print!("{}", text);
        std::io::stdout().flush()?;

        let mut line = String::new();
        let read = self.reader.read_line(&mut line).await?;
        if read == 0 {
            return Err(AppError::Prompt("输入已结束".to_string()));
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    async fn ask_secret(&mut self, text: &str) -> AppResult<String> {
        let text = text.to_string();
        let secret = tokio::task::spawn_blocking(move || rpassword::prompt_password(text))
            .await
            .map_err(|e| AppError::Prompt(format!("读取密码失败: {}", e)))??;
        Ok(secret)
    }
}

/// 按预设顺序作答，并记录所有提问
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    asked: Vec<String>,
    secret_asked: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
            secret_asked: Vec::new(),
        }
    }

    /// 已经提出的问题
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// 其中以不回显方式提出的问题
    pub fn secret_asked(&self) -> &[String] {
        &self.secret_asked
    }
}

#[async_trait]
impl Prompt for ScriptedPrompt {
    async fn ask(&mut self, text: &str) -> AppResult<String> {
        self.asked.push(text.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| AppError::Prompt(format!("没有为 \"{}\" 预设回答", text)))
    }

    async fn ask_secret(&mut self, text: &str) -> AppResult<String> {
        self.secret_asked.push(text.to_string());
        self.ask(text).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    #[tokio::test]
    async fn test_scripted_prompt_answers_in_order() {
        let mut prompt = ScriptedPrompt::new(["first", "second"]);

        assert_eq!(assert_ok!(prompt.ask("a? ").await), "first");
        assert_eq!(assert_ok!(prompt.ask("b? ").await), "second");
        assert_err!(prompt.ask("c? ").await);
        assert_eq!(prompt.asked(), ["a? ", "b? ", "c? "]);
    }

    #[tokio::test]
    async fn test_scripted_prompt_records_secret_questions() {
        let mut prompt = ScriptedPrompt::new(["reader", "hunter2"]);

        assert_eq!(assert_ok!(prompt.ask("login? ").await), "reader");
        assert_eq!(assert_ok!(prompt.ask_secret("password? ").await), "hunter2");
        assert_eq!(prompt.asked(), ["login? ", "password? "]);
        assert_eq!(prompt.secret_asked(), ["password? "]);
    }
}

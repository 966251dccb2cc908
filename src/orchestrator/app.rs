//! 交互式应用 - 编排层
//!
//! ## 核心功能
//!
//! 1. **处理文档**：加载文件句柄，委托 `DocumentProcessor` 完成接收和分析
//! 2. **页签循环**：摘要 / 思考题 / 测验 / 结果，按命令切换
//! 3. **测验会话**：进入测验页时创建新会话，离开时丢弃
//!
//! 输入输出都是泛型的 `BufRead` / `Write`，测试可以用脚本驱动

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::clients::{ChatBackend, LlmClient};
use crate::config::Config;
use crate::models::load_disk_file;
use crate::orchestrator::document_processor::{DocumentProcessor, ProcessedDocument};
use crate::services::{AnalysisService, IntakeService};
use crate::views::{self, Tab};
use crate::workflow::{review, QuizScore, QuizSession};

/// 一次运行的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// 最后一次上传分析成功，交互已结束
    Analyzed,
    /// 最后一次上传失败且用户退出，附带展示给用户的提示
    Rejected { message: String },
}

/// 页签循环的退出方式
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionEnd {
    /// 用户退出或输入结束
    Quit,
    /// 用户要求上传新文件
    Upload(PathBuf),
}

/// 应用主结构
pub struct App<B> {
    processor: DocumentProcessor<B>,
}

impl App<LlmClient> {
    /// 使用配置中的 LLM 服务初始化应用
    pub fn initialize(config: &Config) -> Self {
        Self::with_backend(LlmClient::new(config), config)
    }
}

impl<B: ChatBackend> App<B> {
    pub fn with_backend(backend: B, config: &Config) -> Self {
        let analysis = AnalysisService::new(backend, config.llm_model_name.clone());
        Self {
            processor: DocumentProcessor::new(IntakeService::new(), analysis),
        }
    }

    /// 处理磁盘上的文档并进入交互
    ///
    /// 失败后提示输入新路径重新上传；成功后可在菜单中用 `u <路径>` 换一个文件
    pub async fn run<R: BufRead, W: Write>(&self, path: &Path, mut input: R, mut output: W) -> Result<RunOutcome> {
        let mut path = path.to_path_buf();

        loop {
            writeln!(output, "⏳ 正在分析文档...")?;

            let processed = match load_disk_file(&path).await {
                Ok(file) => self.processor.process(&file).await,
                Err(e) => Err(e),
            };

            match processed {
                Ok(document) => match interact(&document, &mut input, &mut output)? {
                    InteractionEnd::Quit => return Ok(RunOutcome::Analyzed),
                    InteractionEnd::Upload(next) => {
                        info!("📤 重新上传: {}", next.display());
                        path = next;
                    }
                },
                Err(e) => {
                    let message = e.user_message();
                    writeln!(output, "❌ {}", message)?;

                    match prompt_for_path(&mut input, &mut output)? {
                        Some(next) => path = next,
                        None => return Ok(RunOutcome::Rejected { message }),
                    }
                }
            }
        }
    }
}

/// 上传失败后读取新的文件路径；输入结束或 `x` 时返回 None
fn prompt_for_path<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Option<PathBuf>> {
    loop {
        writeln!(output, "请输入新的文件路径重新上传（x 退出）:")?;

        let Some(line) = read_line(input)? else {
            return Ok(None);
        };

        if line.eq_ignore_ascii_case("x") {
            return Ok(None);
        }
        if !line.is_empty() {
            return Ok(Some(PathBuf::from(line)));
        }
    }
}

/// 页签循环
pub fn interact<R: BufRead, W: Write>(
    document: &ProcessedDocument,
    mut input: R,
    mut output: W,
) -> Result<InteractionEnd> {
    let analysis = &document.analysis;

    show_tab(&mut output, document, Tab::Summary)?;

    loop {
        writeln!(output, "{}", views::render_menu())?;

        let Some(line) = read_line(&mut input)? else {
            break;
        };
        let command = line.to_lowercase();

        if command == "x" {
            break;
        }

        if let Some(path) = upload_argument(&line) {
            return Ok(InteractionEnd::Upload(path));
        }

        match Tab::from_command(&command) {
            Some(Tab::Quiz) => {
                info!("🧠 开始测验: {} 道题", analysis.quiz.len());
                if !run_quiz(document, &mut input, &mut output)? {
                    break;
                }
            }
            Some(tab) => show_tab(&mut output, document, tab)?,
            None if command == "u" => writeln!(output, "用法: u <文件路径>")?,
            None => writeln!(output, "未知命令: {}", line)?,
        }
    }

    debug!("交互结束");
    Ok(InteractionEnd::Quit)
}

/// 解析 `u <路径>`，路径保留原始大小写
fn upload_argument(line: &str) -> Option<PathBuf> {
    let (command, path) = line.split_once(char::is_whitespace)?;
    let path = path.trim();
    if command.eq_ignore_ascii_case("u") && !path.is_empty() {
        Some(PathBuf::from(path))
    } else {
        None
    }
}

fn show_tab<W: Write>(output: &mut W, document: &ProcessedDocument, tab: Tab) -> Result<()> {
    let analysis = &document.analysis;
    let page = match tab {
        Tab::Summary => views::render_summary(analysis, &document.file_name, document.lossy),
        Tab::Questions => views::render_questions(analysis),
        Tab::Results => views::render_overview(analysis),
        Tab::Quiz => return Ok(()),
    };
    write!(output, "{}", page)?;
    Ok(())
}

/// 测验循环
///
/// 返回 false 表示输入已结束
fn run_quiz<R: BufRead, W: Write>(document: &ProcessedDocument, input: &mut R, output: &mut W) -> Result<bool> {
    let quiz = &document.analysis.quiz;
    let mut session = QuizSession::new(quiz);

    render_session(output, &session, document)?;

    loop {
        let Some(line) = read_command(input)? else {
            return Ok(false);
        };

        let next = match line.as_str() {
            "b" => return Ok(true),
            "n" if !session.is_completed() && !session.can_advance() => {
                writeln!(output, "请先选择一个答案")?;
                continue;
            }
            "n" => session.advance(),
            "p" => session.retreat(),
            "r" => session.restart(),
            other => match other.parse::<usize>() {
                Ok(choice) if choice >= 1 => session.select(choice - 1),
                _ => {
                    writeln!(output, "未知命令: {}", other)?;
                    continue;
                }
            },
        };

        match next {
            Ok(next) => {
                if next.is_completed() && !session.is_completed() {
                    let score = QuizScore::compute(&next, quiz);
                    info!("🏁 测验完成: {}/{}", score.correct, score.total);
                }
                session = next;
                render_session(output, &session, document)?;
            }
            Err(e) => {
                warn!("测验操作被拒绝: {}", e);
                writeln!(output, "{}", e)?;
            }
        }
    }
}

fn render_session<W: Write>(output: &mut W, session: &QuizSession, document: &ProcessedDocument) -> Result<()> {
    let quiz = &document.analysis.quiz;
    let page = if session.is_completed() {
        let score = QuizScore::compute(session, quiz);
        views::render_results(&score, &review(session, quiz))
    } else {
        views::render_quiz(session, quiz)
    };
    write!(output, "{}", page)?;
    Ok(())
}

/// 读取一行并去掉首尾空白；输入结束时返回 None
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// 读取一行命令（小写）
fn read_command<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    Ok(read_line(input)?.map(|line| line.to_lowercase()))
}

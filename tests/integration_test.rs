use doc_quiz::config::Config;
use doc_quiz::error::AppResult;
use doc_quiz::utils::logging;
use doc_quiz::{App, ChatBackend, ChatRequest, RunOutcome};
use std::io::Cursor;
use std::path::PathBuf;
use std::sync::Mutex;

/// 固定返回内容的后端，并记录收到的请求
struct FakeLlm {
    reply: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl FakeLlm {
    fn new(reply: Option<String>) -> Self {
        Self {
            reply,
            prompts: Mutex::new(Vec::new()),
        }
    }
}

impl ChatBackend for &FakeLlm {
    async fn complete(&self, request: &ChatRequest) -> AppResult<Option<String>> {
        self.prompts.lock().unwrap().push(request.prompt.clone());
        Ok(self.reply.clone())
    }
}

fn analysis_reply() -> String {
    let quiz: Vec<_> = (0..5)
        .map(|i| {
            serde_json::json!({
                "question": format!("Questão {}", i + 1),
                "options": ["A", "B", "C", "D"],
                "correctAnswer": 1,
                "explanation": format!("Explicação {}", i + 1)
            })
        })
        .collect();

    let body = serde_json::json!({
        "summary": "O texto trata de fotossíntese.",
        "keyPoints": ["luz", "clorofila", "glicose", "oxigênio", "água"],
        "questions": ["p1", "p2", "p3", "p4", "p5"],
        "quiz": quiz,
        "difficulty": "Intermediário"
    });

    format!("```json\n{}\n```", body)
}

fn write_temp(name: &str, content: &[u8]) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("doc_quiz_it_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[tokio::test]
async fn test_upload_analyze_and_take_quiz() {
    logging::init(false);

    let path = write_temp("fotossintese.txt", "A fotossíntese converte luz em energia química.".as_bytes());
    let backend = FakeLlm::new(Some(analysis_reply()));
    let app = App::with_backend(&backend, &Config::default());

    // 三题答对（选项 2），两题答错
    let script = "z\n2\nn\n2\nn\n2\nn\n1\nn\n3\nn\nb\nx\n";
    let mut out = Vec::new();
    let outcome = app.run(&path, Cursor::new(script), &mut out).await.unwrap();
    let out = String::from_utf8(out).unwrap();

    assert_eq!(outcome, RunOutcome::Analyzed);
    assert!(out.contains("O texto trata de fotossíntese."));
    assert!(out.contains("[中级]"));
    assert!(out.contains("3/5"));
    assert!(out.contains("正确率 60%"));
    assert!(out.contains("做得不错！"));

    let prompts = backend.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("A fotossíntese converte luz em energia química."));
    assert!(prompts[0].contains("\"fotossintese.txt\""));
}

#[tokio::test]
async fn test_blank_file_is_rejected_before_analysis() {
    let path = write_temp("blank.txt", b"   \n\n\t");
    let backend = FakeLlm::new(Some(analysis_reply()));
    let app = App::with_backend(&backend, &Config::default());

    let mut out = Vec::new();
    let outcome = app.run(&path, Cursor::new(""), &mut out).await.unwrap();

    assert!(matches!(outcome, RunOutcome::Rejected { .. }));
    assert!(String::from_utf8(out).unwrap().contains("文件为空"));
    assert!(backend.prompts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_unsupported_file_is_rejected() {
    let path = write_temp("slides.pptx", b"PK\x03\x04");
    let backend = FakeLlm::new(Some(analysis_reply()));
    let app = App::with_backend(&backend, &Config::default());

    let mut out = Vec::new();
    let outcome = app.run(&path, Cursor::new(""), &mut out).await.unwrap();

    assert_eq!(
        outcome,
        RunOutcome::Rejected {
            message: "不支持的格式，请使用 TXT、PDF、DOC 或 DOCX。".to_string()
        }
    );
}

#[tokio::test]
async fn test_non_json_reply_is_reported() {
    let path = write_temp("notes.txt", b"Some notes.");
    let backend = FakeLlm::new(Some("I cannot help with that.".to_string()));
    let app = App::with_backend(&backend, &Config::default());

    let mut out = Vec::new();
    let outcome = app.run(&path, Cursor::new(""), &mut out).await.unwrap();

    assert!(matches!(outcome, RunOutcome::Rejected { .. }));
    assert!(String::from_utf8(out).unwrap().contains("文档分析失败，请重试。"));
    assert_eq!(backend.prompts.lock().unwrap().len(), 1);
}

#[tokio::test]
#[ignore] // 需要真实的 API 密钥：cargo test -- --ignored
async fn test_live_analysis() {
    logging::init(true);

    let config = Config::from_env();
    let path = write_temp(
        "live.txt",
        "Rust is a systems programming language focused on safety, speed and concurrency.".as_bytes(),
    );

    let app = App::initialize(&config);
    let mut out = Vec::new();
    let outcome = app.run(&path, Cursor::new("x\n"), &mut out).await.unwrap();

    println!("{}", String::from_utf8_lossy(&out));
    assert_eq!(outcome, RunOutcome::Analyzed);
}

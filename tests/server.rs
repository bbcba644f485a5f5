use presession::config::AppConfig;
use presession::server::{AppState, create_router};
use scraper::{Html, Selector};
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::net::TcpListener;

async fn spawn_app() -> String {
    let state = AppState::new(Arc::new(AppConfig::default())).unwrap();
    let app = create_router(Arc::new(state));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn text_of(html: &Html, selector: &str) -> Option<String> {
    let sel = Selector::parse(selector).unwrap();
    html.select(&sel)
        .next()
        .map(|e| e.text().collect::<String>().trim().to_string())
}

const REFLECTION: &str = "Esta semana me sentí bastante cansado por el trabajo, pero también \
    contento porque avancé en el proyecto. Quiero hablar de cómo organizar mejor mi tiempo. \
    El trabajo ocupa casi todo mi día y la familia reclama más atención. Me gustaría encontrar \
    un equilibrio entre el trabajo, el descanso y la familia sin sentir culpa. A veces siento \
    miedo de no cumplir con lo que esperan de mí, aunque sé que he logrado avances importantes \
    este mes y estoy orgulloso de ello.";

#[tokio::test]
async fn index_renders_form() {
    let base = spawn_app().await;
    let body = reqwest::get(&base).await.unwrap().text().await.unwrap();
    let html = Html::parse_document(&body);
    assert_eq!(text_of(&html, "#word-count").as_deref(), Some("0"));
    assert!(text_of(&html, "#visualization").is_none());
}

#[tokio::test]
async fn generate_with_empty_text_warns() {
    let base = spawn_app().await;
    let body = reqwest::Client::new()
        .post(&base)
        .form(&[("text", "   "), ("action", "generate"), ("context", "therapy")])
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    let html = Html::parse_document(&body);
    let warning = text_of(&html, ".notice-warning").unwrap();
    assert!(warning.contains("escribe algo"));
    assert!(text_of(&html, "#visualization").is_none());
}

#[tokio::test]
async fn generate_with_short_text_is_refused() {
    let base = spawn_app().await;
    let body = reqwest::Client::new()
        .post(&base)
        .form(&[("text", "Hoy quiero hablar de mi semana"), ("action", "generate")])
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    let html = Html::parse_document(&body);
    let warning = text_of(&html, ".notice-warning").unwrap();
    assert!(warning.contains("al menos 50 palabras"), "unexpected warning: {warning}");
    assert!(text_of(&html, "#visualization").is_none());
}

#[tokio::test]
async fn unknown_context_still_renders() {
    let base = spawn_app().await;
    let response = reqwest::Client::new()
        .post(&base)
        .form(&[("text", "hola"), ("context", "pareja"), ("action", "update")])
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let html = Html::parse_document(&response.text().await.unwrap());
    let selected = text_of(&html, "option[selected]").unwrap();
    assert_eq!(selected, "Otro");
}

#[tokio::test]
async fn generate_renders_visualization() {
    let base = spawn_app().await;
    let response = reqwest::Client::new()
        .post(&base)
        .form(&[
            ("name", "Sam"),
            ("session_date", "2024-09-10"),
            ("context", "coaching"),
            ("text", REFLECTION),
            ("action", "generate"),
        ])
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let html = Html::parse_document(&response.text().await.unwrap());
    assert!(text_of(&html, "#visualization").is_some());
    assert_eq!(text_of(&html, "#session-date").as_deref(), Some("10/09/2024"));

    let first = text_of(&html, "#top-words li").unwrap();
    assert!(first.starts_with("trabajo"), "unexpected top word: {first}");

    let cloud = Selector::parse("svg.word-cloud text").unwrap();
    assert!(html.select(&cloud).count() > 5);
    let bars = Selector::parse("svg.bar-chart rect.bar").unwrap();
    assert_eq!(html.select(&bars).count(), 4);
}

#[tokio::test]
async fn api_analyze_reports_bucket() {
    let base = spawn_app().await;
    let text = vec!["palabra"; 301].join(" ");
    let body: Value = reqwest::Client::new()
        .post(format!("{base}/api/analyze"))
        .json(&json!({ "text": text }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["progress"]["word_count"], 301);
    assert_eq!(body["progress"]["bucket"], "high");
    assert_eq!(body["progress"]["fraction"], 1.0);
    assert_eq!(body["progress"]["estimated_minutes"], 10);
    assert_eq!(body["generate_enabled"], true);
}

#[tokio::test]
async fn api_generate_statuses() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    let empty: Value = client
        .post(format!("{base}/api/generate"))
        .json(&json!({ "text": "" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(empty["status"], "warning");
    assert!(empty["visualization"].is_null());

    let short: Value = client
        .post(format!("{base}/api/generate"))
        .json(&json!({ "text": "Hoy me siento bien con mi trabajo" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(short["status"], "warning");
    assert!(short["notice"]["text"].as_str().unwrap().contains("50"));
    assert!(short["visualization"].is_null());

    let stopwords = vec!["yo y tú, de la que el"; 8].join(" ");
    let only_stopwords: Value = client
        .post(format!("{base}/api/generate"))
        .json(&json!({ "text": stopwords }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(only_stopwords["status"], "error");
    assert_eq!(only_stopwords["notice"]["level"], "error");

    let ok: Value = client
        .post(format!("{base}/api/generate"))
        .json(&json!({ "text": REFLECTION }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(ok["status"], "ok");
    assert!(ok["visualization"]["sentiment"]["neutral"].as_f64().unwrap() > 0.0);
    assert!(ok["visualization"]["metrics"]["sentences"].as_u64().unwrap() >= 4);
}

#[tokio::test]
async fn serves_stylesheet_and_health() {
    let base = spawn_app().await;
    let css = reqwest::get(format!("{base}/static/style.css")).await.unwrap();
    assert_eq!(
        css.headers()["content-type"].to_str().unwrap(),
        "text/css; charset=utf-8"
    );
    let health = reqwest::get(format!("{base}/health")).await.unwrap().text().await.unwrap();
    assert_eq!(health, "ok");
}

use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct HistoryResponse {
    total: usize,
    recent: Vec<ObservationPayload>,
}

#[derive(Debug, Deserialize)]
struct ObservationPayload {
    mood: String,
    recorded_at: String,
}

#[derive(Debug, Deserialize)]
struct SnapshotPayload {
    weekly_average: u32,
    trend: String,
    positive_streak: u32,
}

#[derive(Debug, Deserialize)]
struct PlaylistPayload {
    mood: String,
    songs: Vec<SongPayload>,
}

#[derive(Debug, Deserialize)]
struct SongPayload {
    title: String,
    artist: String,
}

#[derive(Debug, Deserialize)]
struct ProfilePayload {
    profile: ProfileFields,
    entries: usize,
    happiness_percentage: u32,
}

#[derive(Debug, Deserialize)]
struct ProfileFields {
    name: String,
    email: String,
    age: String,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_path() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("moodsense_http_{}_{}.json", std::process::id(), nanos));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/history")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let data_path = unique_data_path();
    let child = Command::new(env!("CARGO_BIN_EXE_moodsense"))
        .env("PORT", port.to_string())
        .env("APP_DATA_PATH", data_path)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn record(client: &Client, base_url: &str, mood: &str) -> reqwest::Response {
    client
        .post(format!("{base_url}/api/mood"))
        .json(&serde_json::json!({ "mood": mood }))
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_record_mood_appends_to_history() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before: HistoryResponse = client
        .get(format!("{}/api/history", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let response = record(&client, &server.base_url, "Happy").await;
    assert!(response.status().is_success());

    let after: HistoryResponse = client
        .get(format!("{}/api/history", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(after.total, before.total + 1);
    assert_eq!(after.recent[0].mood, "Happy");
    assert!(!after.recent[0].recorded_at.is_empty());
}

#[tokio::test]
async fn http_unknown_mood_is_rejected() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = record(&client, &server.base_url, "Ecstatic").await;
    assert_eq!(response.status().as_u16(), 400);
    let body = response.text().await.unwrap();
    assert!(body.contains("Ecstatic"));
}

#[tokio::test]
async fn http_analytics_reflects_recorded_moods() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    assert!(record(&client, &server.base_url, "Happy").await.status().is_success());
    assert!(record(&client, &server.base_url, "Calm").await.status().is_success());

    let snapshot: SnapshotPayload = client
        .get(format!("{}/api/analytics", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    // Everything recorded in this run happened moments ago, so the window is
    // non-empty and Happy + Calm just extended the streak.
    assert!(snapshot.weekly_average <= 100);
    assert!(snapshot.weekly_average > 0);
    assert!(snapshot.positive_streak >= 2);
    assert!(["up", "down", "stable"].contains(&snapshot.trend.as_str()));
}

#[tokio::test]
async fn http_playlist_matches_latest_mood() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    assert!(record(&client, &server.base_url, "Tired").await.status().is_success());

    let playlist: PlaylistPayload = client
        .get(format!("{}/api/playlist", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(playlist.mood, "Tired");
    assert_eq!(playlist.songs.len(), 5);
    assert!(!playlist.songs[0].title.is_empty());
    assert!(!playlist.songs[0].artist.is_empty());
}

#[tokio::test]
async fn http_playlist_is_missing_before_any_mood() {
    let _guard = TEST_LOCK.lock().await;
    // Fresh server with its own empty data file; the shared one may already
    // hold moods from other tests.
    let server = spawn_server().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/api/playlist", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn http_profile_round_trips() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .put(format!("{}/api/profile", server.base_url))
        .json(&serde_json::json!({
            "name": "Ada",
            "email": "ada@example.com",
            "age": "36"
        }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let profile: ProfilePayload = client
        .get(format!("{}/api/profile", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(profile.profile.name, "Ada");
    assert_eq!(profile.profile.email, "ada@example.com");
    assert_eq!(profile.profile.age, "36");
    assert!(profile.happiness_percentage <= 100);

    let history: HistoryResponse = client
        .get(format!("{}/api/history", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(profile.entries, history.total);
}

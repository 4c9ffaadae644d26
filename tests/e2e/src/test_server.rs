use anyhow::Result;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::time::Duration;

/// Serves the site with the Dioxus CLI on a random port and tears it down
/// on drop. The site is client-only, so `dx serve` is the whole stack.
pub struct TestServer {
    url: String,
    process: Option<Child>,
}

impl TestServer {
    pub async fn start() -> Result<Self> {
        let port = get_random_port()?;

        let process = Command::new("dx")
            .args(&[
                "serve",
                "--package",
                "web",
                "--platform",
                "web",
                "--addr",
                "127.0.0.1",
                "--port",
                &port.to_string(),
            ])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .expect("Failed to start dev server");

        let url = format!("http://localhost:{}", port);

        // Wait for server to be ready
        wait_for_server(&url).await?;

        Ok(Self {
            url,
            process: Some(process),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Whether the Dioxus CLI is installed.
    pub fn is_available() -> bool {
        Command::new("dx")
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(mut process) = self.process.take() {
            let _ = process.kill();
        }
    }
}

fn get_random_port() -> Result<u16> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let port = listener.local_addr()?.port();
    Ok(port)
}

async fn wait_for_server(url: &str) -> Result<()> {
    // Wait up to 5 minutes; the first run compiles the wasm bundle.
    for i in 0..3000 {
        if let Ok(response) = reqwest::get(url).await {
            if response.status().is_success() {
                return Ok(());
            }
        }
        tokio::time::sleep(Duration::from_millis(100)).await;

        // Log progress every 5 seconds
        if i > 0 && i % 50 == 0 {
            eprintln!("Still waiting for server... ({}s)", i / 10);
        }
    }
    anyhow::bail!("Server did not start in time (waited 300s)")
}

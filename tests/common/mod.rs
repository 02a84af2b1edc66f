//! Shared helpers for CLI integration tests.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};

use assert_cmd::cargo;
use tempfile::TempDir;

/// Build a `casctl` command isolated from the user's environment.
///
/// Points `CASCTL_CONFIG` at a short-timeout config inside `temp_dir` so a
/// config in the real home directory cannot leak into the test.
pub fn casctl(temp_dir: &TempDir) -> assert_cmd::Command {
    let config = temp_dir.path().join("config.toml");
    std::fs::write(&config, "[http]\ntimeout_secs = 5\n").unwrap();

    let mut cmd = cargo::cargo_bin_cmd!("casctl");
    cmd.env("CASCTL_CONFIG", &config)
        .env("NO_COLOR", "1")
        .env_remove("CASCTL_TIMEOUT");
    cmd
}

/// HTTP server answering exactly one request with a canned response.
pub struct OneShotServer {
    pub base_url: String,
    handle: JoinHandle<String>,
}

impl OneShotServer {
    /// Serve `body` with `status` (e.g. `"200 OK"`) to the first client.
    pub fn start(status: &'static str, body: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let request = read_request_head(&mut stream);
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
            request
        });

        Self {
            base_url: format!("http://127.0.0.1:{port}/cas/"),
            handle,
        }
    }

    /// Wait for the request to be served and return its head.
    pub fn request(self) -> String {
        self.handle.join().unwrap()
    }
}

fn read_request_head(stream: &mut TcpStream) -> String {
    let mut head = Vec::new();
    let mut buf = [0u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut buf).unwrap();
        if n == 0 {
            break;
        }
        head.extend_from_slice(&buf[..n]);
    }
    String::from_utf8_lossy(&head).into_owned()
}

/// A local URL on which nothing is listening.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}/cas/")
}

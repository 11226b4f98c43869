use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Request as seen by the canned upstream
#[allow(dead_code)]
#[derive(Debug)]
pub struct ReceivedRequest {
    pub line: String,
    /// Header lines, lowercased
    pub headers: Vec<String>,
}

/// Serve one canned HTTP response on an ephemeral port.
///
/// Returns the base URL and a receiver yielding the request.
pub fn serve_once(response: Vec<u8>) -> (String, mpsc::Receiver<ReceivedRequest>) {
    serve_in_parts(vec![response], Duration::ZERO)
}

/// Like [`serve_once`], but writes `parts` one after another with `pause` in between
#[allow(dead_code)]
pub fn serve_in_parts(
    parts: Vec<Vec<u8>>,
    pause: Duration,
) -> (String, mpsc::Receiver<ReceivedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind upstream");
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let (stream, _) = listener.accept().expect("accept failed");
        let mut reader = BufReader::new(stream.try_clone().unwrap());

        let mut line = String::new();
        reader.read_line(&mut line).unwrap();
        let mut headers = Vec::new();
        loop {
            let mut header = String::new();
            let n = reader.read_line(&mut header).unwrap();
            if n == 0 || header == "\r\n" {
                break;
            }
            headers.push(header.trim_end().to_lowercase());
        }
        let _ = tx.send(ReceivedRequest {
            line: line.trim_end().to_string(),
            headers,
        });

        let mut stream = stream;
        for (i, part) in parts.iter().enumerate() {
            if i > 0 {
                thread::sleep(pause);
            }
            if stream.write_all(part).is_err() {
                return;
            }
            let _ = stream.flush();
        }
    });

    (format!("http://{addr}"), rx)
}

pub fn http_response(status: &str, body: &str) -> Vec<u8> {
    format!(
        "HTTP/1.1 {status}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    )
    .into_bytes()
}

/// A port with nothing listening on it
#[allow(dead_code)]
pub fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

#[allow(dead_code)]
pub const JOB_LOG: &str = "\
=== RUN   TestClientConnClose
--- PASS: TestClientConnClose (0.02s)
=== RUN   TestStreamHang
=== RUN   TestRetryThrottling
--- FAIL: TestRetryThrottling (1.00s)
WARNING: DATA RACE
";

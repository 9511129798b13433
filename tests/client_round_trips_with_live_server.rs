mod common;

use common::{Product, StubParser};
use solr::{Client, ClientError, Connection, Query};
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;

fn read_request(stream: &mut TcpStream) -> String {
    let mut raw = Vec::new();
    let mut buffer = [0u8; 1024];

    while !raw.windows(4).any(|window| window == b"\r\n\r\n") {
        let count = stream.read(&mut buffer).unwrap();
        if count == 0 {
            break;
        }
        raw.extend_from_slice(&buffer[..count]);
    }

    let head_end = raw
        .windows(4)
        .position(|window| window == b"\r\n\r\n")
        .map(|position| position + 4)
        .unwrap_or(raw.len());
    let head = String::from_utf8_lossy(&raw[..head_end]).to_string();
    let content_length = head
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if !name.eq_ignore_ascii_case("content-length") {
                return None;
            }
            value.trim().parse::<usize>().ok()
        })
        .unwrap_or(0);

    while raw.len() < head_end + content_length {
        let count = stream.read(&mut buffer).unwrap();
        if count == 0 {
            break;
        }
        raw.extend_from_slice(&buffer[..count]);
    }

    String::from_utf8_lossy(&raw).to_string()
}

fn answer(stream: &mut TcpStream, body: &str) {
    let response = format!(
        "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        body.len(),
        body
    );
    stream.write_all(response.as_bytes()).unwrap();
}

#[test]
fn test_client_round_trips_with_live_server() -> Result<(), ClientError> {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let server = thread::spawn(move || {
        let mut captured = Vec::new();
        for body in ["", "<response />"] {
            let (mut stream, _) = listener.accept().unwrap();
            captured.push(read_request(&mut stream));
            answer(&mut stream, body);
        }
        captured
    });

    let connection = Connection::new(&format!("http://127.0.0.1:{}/solr", port))?;
    let client = Client::new(connection, StubParser::<Product>::new(vec![], 1));

    client.add(&Product { id: 1, name: "iPod".to_owned(), in_stock: true })?;
    let results = client.query(&Query::new("id:1"))?;
    let captured = server.join().unwrap();

    assert_eq!(1, results.num_found());
    assert!(captured[0].starts_with("POST /solr/update HTTP/1.1\r\n"));
    assert!(captured[0].to_lowercase().contains("content-type: text/xml; charset=utf-8"));
    let expected_body = "<add><doc>\
        <field name=\"id\">1</field>\
        <field name=\"name\">iPod</field>\
        <field name=\"in_stock\">true</field>\
        </doc></add>";
    assert!(captured[0].ends_with(expected_body));
    assert!(captured[1].starts_with("GET /solr/select?q=id%3A1 HTTP/1.1\r\n"));

    Ok(())
}

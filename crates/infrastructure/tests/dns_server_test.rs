use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_proto::rr::{Name, RData, RecordType as HickoryRecordType};
use hickory_server::ServerFuture;
use hostsd_application::ports::{BlacklistPort, RecordStore};
use hostsd_application::use_cases::{HandleDnsQueryUseCase, ResolveQueryUseCase};
use hostsd_domain::{Blacklist, CnameFallback, RecordSet, RecordType};
use hostsd_infrastructure::dns::DnsServerHandler;
use hostsd_infrastructure::repositories::{InMemoryBlacklist, InMemoryRecordStore};
use socket2::{Domain, Protocol, Socket, Type};
use std::net::{IpAddr, Ipv6Addr, SocketAddr};
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream, UdpSocket};

const TIMEOUT: Duration = Duration::from_secs(5);

/// Blacklist that remembers every source it was asked about and the verdict.
#[derive(Default)]
struct RecordingBlacklist {
    inner: InMemoryBlacklist,
    checks: Mutex<Vec<(IpAddr, bool)>>,
}

impl RecordingBlacklist {
    fn with_entries(entries: &[&str]) -> Self {
        let list = Self::default();
        list.inner.replace(Blacklist::new(entries.iter().copied()));
        list
    }

    fn checks(&self) -> Vec<(IpAddr, bool)> {
        self.checks.lock().unwrap().clone()
    }
}

impl BlacklistPort for RecordingBlacklist {
    fn contains(&self, ip: &IpAddr) -> bool {
        let listed = self.inner.contains(ip);
        self.checks.lock().unwrap().push((*ip, listed));
        listed
    }

    fn replace(&self, blacklist: Blacklist) {
        self.inner.replace(blacklist);
    }

    fn len(&self) -> usize {
        self.inner.len()
    }
}

fn make_handler(
    store: Arc<InMemoryRecordStore>,
    blacklist: Arc<dyn BlacklistPort>,
) -> DnsServerHandler {
    let resolver = Arc::new(ResolveQueryUseCase::new(store, CnameFallback::AddressOnly));
    let use_case = HandleDnsQueryUseCase::new(resolver).with_blacklist(blacklist);
    DnsServerHandler::new(Arc::new(use_case))
}

async fn start_server(store: Arc<InMemoryRecordStore>) -> SocketAddr {
    let blacklist = Arc::new(InMemoryBlacklist::new(Blacklist::new(["127.0.0.1"])));
    let handler = make_handler(store, blacklist);

    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let addr = socket.local_addr().unwrap();
    let mut server = ServerFuture::new(handler);
    server.register_socket(socket);
    tokio::spawn(async move {
        let _ = server.block_until_done().await;
    });
    addr
}

async fn start_tcp_server(handler: DnsServerHandler, listener: TcpListener) -> SocketAddr {
    let addr = listener.local_addr().unwrap();
    let mut server = ServerFuture::new(handler);
    server.register_listener(listener, TIMEOUT);
    tokio::spawn(async move {
        let _ = server.block_until_done().await;
    });
    addr
}

fn dual_stack_listener() -> TcpListener {
    let socket = Socket::new(Domain::IPV6, Type::STREAM, Some(Protocol::TCP)).unwrap();
    socket.set_only_v6(false).unwrap();
    let addr = SocketAddr::new(IpAddr::V6(Ipv6Addr::UNSPECIFIED), 0);
    socket.bind(&addr.into()).unwrap();
    socket.listen(16).unwrap();
    socket.set_nonblocking(true).unwrap();
    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener).unwrap()
}

fn build_query(name: &str, record_type: HickoryRecordType) -> Vec<u8> {
    let mut message = Message::new();
    message
        .set_id(4242)
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(true);
    message.add_query(Query::query(Name::from_str(name).unwrap(), record_type));
    message.to_vec().unwrap()
}

async fn query(server: SocketAddr, name: &str, record_type: HickoryRecordType) -> Message {
    let client = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    client
        .send_to(&build_query(name, record_type), server)
        .await
        .unwrap();

    let mut buf = [0u8; 4096];
    let (len, _) = tokio::time::timeout(TIMEOUT, client.recv_from(&mut buf))
        .await
        .expect("no response within 5s")
        .unwrap();
    Message::from_vec(&buf[..len]).unwrap()
}

/// DNS over TCP: every message is preceded by its length as a big-endian u16.
async fn query_tcp(server: SocketAddr, name: &str, record_type: HickoryRecordType) -> Message {
    let mut stream = TcpStream::connect(server).await.unwrap();
    let payload = build_query(name, record_type);
    stream
        .write_all(&(payload.len() as u16).to_be_bytes())
        .await
        .unwrap();
    stream.write_all(&payload).await.unwrap();

    let read = async {
        let mut len = [0u8; 2];
        stream.read_exact(&mut len).await.unwrap();
        let mut body = vec![0u8; u16::from_be_bytes(len) as usize];
        stream.read_exact(&mut body).await.unwrap();
        body
    };
    let body = tokio::time::timeout(TIMEOUT, read)
        .await
        .expect("no response within 5s");
    Message::from_vec(&body).unwrap()
}

fn store_with(entries: &[(&str, RecordSet)]) -> Arc<InMemoryRecordStore> {
    let store = Arc::new(InMemoryRecordStore::new());
    for (name, set) in entries {
        store.load(name, set.clone());
    }
    store
}

fn nas_store() -> Arc<InMemoryRecordStore> {
    store_with(&[(
        "nas.lan",
        RecordSet::new(RecordType::A, ["10.0.0.5"], 0).unwrap(),
    )])
}

fn assert_single_a(response: &Message, expected: &str) {
    assert_eq!(response.id(), 4242);
    assert_eq!(response.message_type(), MessageType::Response);
    assert_eq!(response.response_code(), ResponseCode::NoError);
    assert_eq!(response.answers().len(), 1);
    match response.answers()[0].data() {
        RData::A(a) => assert_eq!(a.0.to_string(), expected),
        other => panic!("expected A, got {other:?}"),
    }
}

// ── UDP ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_a_query_returns_host_address() {
    let server = start_server(nas_store()).await;

    let response = query(server, "nas.lan.", HickoryRecordType::A).await;

    assert_single_a(&response, "10.0.0.5");
}

#[tokio::test]
async fn test_unknown_name_gets_empty_noerror() {
    let server = start_server(store_with(&[])).await;

    let response = query(server, "missing.lan.", HickoryRecordType::A).await;

    assert_eq!(response.response_code(), ResponseCode::NoError);
    assert!(response.answers().is_empty());
}

#[tokio::test]
async fn test_unsupported_type_gets_empty_noerror() {
    let server = start_server(nas_store()).await;

    let response = query(server, "nas.lan.", HickoryRecordType::TXT).await;

    assert_eq!(response.response_code(), ResponseCode::NoError);
    assert!(response.answers().is_empty());
}

#[tokio::test]
async fn test_mx_query_carries_priority_for_every_exchange() {
    let store = store_with(&[(
        "mail.lan",
        RecordSet::new(RecordType::MX, ["mx1.lan", "mx2.lan"], 0)
            .unwrap()
            .with_priority(10),
    )]);
    let server = start_server(store).await;

    let response = query(server, "mail.lan.", HickoryRecordType::MX).await;

    assert_eq!(response.answers().len(), 2);
    for record in response.answers() {
        match record.data() {
            RData::MX(mx) => assert_eq!(mx.preference(), 10),
            other => panic!("expected MX, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn test_cname_answers_address_query() {
    let store = store_with(&[(
        "www.lan",
        RecordSet::new(RecordType::CNAME, ["web.lan"], 0).unwrap(),
    )]);
    let server = start_server(store).await;

    let response = query(server, "WWW.lan.", HickoryRecordType::A).await;

    assert_eq!(response.answers().len(), 1);
    assert!(matches!(response.answers()[0].data(), RData::CNAME(_)));
}

// ── TCP ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_tcp_query_returns_host_address() {
    let blacklist = Arc::new(RecordingBlacklist::default());
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let server = start_tcp_server(make_handler(nas_store(), blacklist), listener).await;

    let response = query_tcp(server, "nas.lan.", HickoryRecordType::A).await;

    assert_single_a(&response, "10.0.0.5");
}

#[tokio::test]
async fn test_dual_stack_tcp_flags_blacklisted_ipv4_source() {
    let blacklist = Arc::new(RecordingBlacklist::with_entries(&["127.0.0.1"]));
    let handler = make_handler(nas_store(), blacklist.clone());
    let port = start_tcp_server(handler, dual_stack_listener()).await.port();

    let server = SocketAddr::from(([127, 0, 0, 1], port));
    let response = query_tcp(server, "nas.lan.", HickoryRecordType::A).await;

    assert_single_a(&response, "10.0.0.5");
    let checks = blacklist.checks();
    assert_eq!(checks.len(), 1);
    let (source, listed) = checks[0];
    assert_eq!(source.to_canonical(), IpAddr::from([127, 0, 0, 1]));
    assert!(listed, "source {source} was not matched against 127.0.0.1");
}

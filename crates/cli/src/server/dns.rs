use anyhow::Context;
use hickory_server::ServerFuture;
use hostsd_domain::config::ServerConfig;
use hostsd_infrastructure::dns::DnsServerHandler;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::{IpAddr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::{TcpListener, UdpSocket};
use tokio::task::JoinSet;
use tracing::{error, info};

/// Socket addresses every worker binds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub udp: SocketAddr,
    pub tcp: Option<SocketAddr>,
    /// IPv6-only UDP socket next to an IPv4 primary endpoint
    pub udp6: Option<SocketAddr>,
    pub tcp_timeout: Duration,
}

impl Endpoints {
    pub fn from_config(server: &ServerConfig) -> anyhow::Result<Self> {
        let bind: IpAddr = server
            .bind_address
            .parse()
            .with_context(|| format!("invalid bind address '{}'", server.bind_address))?;
        let any_v6 = SocketAddr::new(IpAddr::V6(Ipv6Addr::UNSPECIFIED), server.port);

        let tcp = server.enable_tcp.then(|| {
            if server.enable_v6 {
                any_v6
            } else {
                SocketAddr::new(bind, server.port)
            }
        });
        let udp6 = (server.enable_v6 && bind.is_ipv4()).then_some(any_v6);

        Ok(Self {
            udp: SocketAddr::new(bind, server.port),
            tcp,
            udp6,
            tcp_timeout: Duration::from_secs(server.tcp_timeout_secs),
        })
    }
}

struct WorkerSockets {
    udp: UdpSocket,
    udp6: Option<UdpSocket>,
    tcp: Option<TcpListener>,
}

/// Bind every endpoint for every worker, then serve until all workers stop.
///
/// Binding happens before anything is served, so a port already taken
/// fails startup as a whole.
pub async fn start_dns_server(
    endpoints: Endpoints,
    handlers: Vec<(usize, DnsServerHandler)>,
) -> anyhow::Result<()> {
    info!(
        udp = %endpoints.udp,
        tcp = ?endpoints.tcp,
        udp6 = ?endpoints.udp6,
        num_workers = handlers.len(),
        "Starting DNS server with SO_REUSEPORT"
    );

    let mut bound = Vec::with_capacity(handlers.len());
    for (id, handler) in handlers {
        let sockets = bind_worker(&endpoints)
            .with_context(|| format!("worker {id} failed to bind"))?;
        bound.push((id, handler, sockets));
    }

    let mut join_set: JoinSet<()> = JoinSet::new();
    for (id, handler, sockets) in bound {
        let mut server = ServerFuture::new(handler);
        server.register_socket(sockets.udp);
        if let Some(udp6) = sockets.udp6 {
            server.register_socket(udp6);
        }
        if let Some(tcp) = sockets.tcp {
            server.register_listener(tcp, endpoints.tcp_timeout);
        }

        join_set.spawn(async move {
            if let Err(e) = server.block_until_done().await {
                error!(worker = id, error = %e, "DNS worker stopped");
            }
        });
    }

    info!(workers = join_set.len(), port = endpoints.udp.port(), "DNS server ready");

    while join_set.join_next().await.is_some() {}
    Ok(())
}

fn bind_worker(endpoints: &Endpoints) -> anyhow::Result<WorkerSockets> {
    let udp = create_udp_socket(endpoints.udp, false)?;
    let udp6 = endpoints
        .udp6
        .map(|addr| create_udp_socket(addr, true))
        .transpose()?;
    let tcp = endpoints.tcp.map(create_tcp_listener).transpose()?;
    Ok(WorkerSockets { udp, udp6, tcp })
}

fn create_udp_socket(socket_addr: SocketAddr, only_v6: bool) -> anyhow::Result<UdpSocket> {
    let socket = Socket::new(
        Domain::for_address(socket_addr),
        Type::DGRAM,
        Some(Protocol::UDP),
    )?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(only_v6)?;
    }
    socket.set_reuse_address(true)?;
    #[cfg(unix)]
    socket.set_reuse_port(true)?;
    socket.set_recv_buffer_size(512 * 1024)?;
    socket.set_send_buffer_size(512 * 1024)?;
    socket
        .bind(&socket_addr.into())
        .with_context(|| format!("bind udp {socket_addr}"))?;
    socket.set_nonblocking(true)?;
    let std_socket: std::net::UdpSocket = socket.into();
    Ok(UdpSocket::from_std(std_socket)?)
}

fn create_tcp_listener(socket_addr: SocketAddr) -> anyhow::Result<TcpListener> {
    let socket = Socket::new(
        Domain::for_address(socket_addr),
        Type::STREAM,
        Some(Protocol::TCP),
    )?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    #[cfg(unix)]
    socket.set_reuse_port(true)?;
    socket
        .bind(&socket_addr.into())
        .with_context(|| format!("bind tcp {socket_addr}"))?;
    socket.listen(1024)?;
    socket.set_nonblocking(true)?;
    let std_listener: std::net::TcpListener = socket.into();
    Ok(TcpListener::from_std(std_listener)?)
}

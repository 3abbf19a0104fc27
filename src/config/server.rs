use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use educe::Educe;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Educe)]
#[educe(Default)]
#[serde(default)]
pub struct Server {
    #[educe(Default(expression = IpAddr::V4(Ipv4Addr::LOCALHOST)))]
    pub host: IpAddr,
    #[educe(Default(expression = 3000))]
    pub port: u16,
    #[educe(Default(expression = "public".into()))]
    pub frontend_dir: String,
}

impl Server {
    pub fn to_socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

use hostsd_domain::Blacklist;
use std::net::IpAddr;

pub trait BlacklistPort: Send + Sync {
    fn contains(&self, ip: &IpAddr) -> bool;

    fn replace(&self, blacklist: Blacklist);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

use arc_swap::ArcSwap;
use hostsd_application::ports::BlacklistPort;
use hostsd_domain::Blacklist;
use std::net::IpAddr;
use std::sync::Arc;

#[derive(Default)]
pub struct InMemoryBlacklist {
    list: ArcSwap<Blacklist>,
}

impl InMemoryBlacklist {
    pub fn new(list: Blacklist) -> Self {
        Self {
            list: ArcSwap::from_pointee(list),
        }
    }
}

impl BlacklistPort for InMemoryBlacklist {
    fn contains(&self, ip: &IpAddr) -> bool {
        self.list.load().contains(ip)
    }

    fn replace(&self, blacklist: Blacklist) {
        self.list.store(Arc::new(blacklist));
    }

    fn len(&self) -> usize {
        self.list.load().len()
    }
}

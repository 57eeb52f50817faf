// metrics.rs - Host CPU / memory / network sampling for the dashboard

use std::fmt;
use std::future::Future;
use std::time::Instant;

use sysinfo::{Networks, System, MINIMUM_CPU_UPDATE_INTERVAL};

use crate::error::MetricsError;

const GIB: f64 = 1024.0 * 1024.0 * 1024.0;
const MIB: f64 = 1024.0 * 1024.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SystemMetrics {
    pub cpu_percent: f64,
    pub memory_percent: f64,
    pub memory_used_gb: f64,
    pub memory_total_gb: f64,
    pub net_sent_mb_per_s: f64,
    pub net_recv_mb_per_s: f64,
}

impl fmt::Display for SystemMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CPU: {:.1}% | MEM: {:.1}% ({:.1}/{:.1}GB) | NET: ↓{:.2}MB/s ↑{:.2}MB/s",
            self.cpu_percent,
            self.memory_percent,
            self.memory_used_gb,
            self.memory_total_gb,
            self.net_recv_mb_per_s,
            self.net_sent_mb_per_s,
        )
    }
}

pub trait MetricsSource {
    fn collect(&mut self) -> impl Future<Output = Result<SystemMetrics, MetricsError>> + Send;
}

/// Byte counters seen at the previous sample.
struct NetSample {
    sent: u64,
    recv: u64,
    at: Instant,
}

pub struct SysinfoCollector {
    sys: System,
    networks: Networks,
    last_net: Option<NetSample>,
}

impl SysinfoCollector {
    pub fn new() -> Result<Self, MetricsError> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return Err(MetricsError::Unsupported);
        }
        Ok(Self {
            sys: System::new(),
            networks: Networks::new_with_refreshed_list(),
            last_net: None,
        })
    }

    fn network_rates(&mut self) -> (f64, f64) {
        self.networks.refresh();
        let (sent, recv) = self
            .networks
            .iter()
            .fold((0u64, 0u64), |(s, r), (_, data)| {
                (s + data.total_transmitted(), r + data.total_received())
            });
        let now = Instant::now();
        let rates = match &self.last_net {
            Some(prev) => rates_between(prev, sent, recv, now),
            None => (0.0, 0.0),
        };
        self.last_net = Some(NetSample { sent, recv, at: now });
        rates
    }
}

fn rates_between(prev: &NetSample, sent: u64, recv: u64, now: Instant) -> (f64, f64) {
    let secs = now.duration_since(prev.at).as_secs_f64();
    if secs <= 0.0 {
        return (0.0, 0.0);
    }
    let sent = sent.saturating_sub(prev.sent) as f64 / MIB / secs;
    let recv = recv.saturating_sub(prev.recv) as f64 / MIB / secs;
    (sent, recv)
}

impl MetricsSource for SysinfoCollector {
    async fn collect(&mut self) -> Result<SystemMetrics, MetricsError> {
        // CPU usage is a difference between two refreshes.
        self.sys.refresh_cpu_usage();
        tokio::time::sleep(MINIMUM_CPU_UPDATE_INTERVAL).await;
        self.sys.refresh_cpu_usage();
        self.sys.refresh_memory();

        let total = self.sys.total_memory();
        if total == 0 {
            return Err(MetricsError::MemoryUnavailable);
        }
        let used = self.sys.used_memory();
        let (net_sent_mb_per_s, net_recv_mb_per_s) = self.network_rates();

        Ok(SystemMetrics {
            cpu_percent: f64::from(self.sys.global_cpu_usage()),
            memory_percent: used as f64 / total as f64 * 100.0,
            memory_used_gb: used as f64 / GIB,
            memory_total_gb: total as f64 / GIB,
            net_sent_mb_per_s,
            net_recv_mb_per_s,
        })
    }
}

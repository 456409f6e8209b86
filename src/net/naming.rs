//! 自动命名
//!
//! 交换机 `s0, s1, ...`，主机 `h0, h1, ...`；计数器属于单个拓扑，只增不减。

/// 单个拓扑的命名计数器
#[derive(Debug, Default, Clone)]
pub struct Namer {
    next_switch: u64,
    next_host: u64,
}

impl Namer {
    /// 预留下一个交换机名称。计数器在返回前已经递增，调用方失败也不会回滚。
    pub fn next_switch_name(&mut self) -> String {
        let n = self.next_switch;
        self.next_switch += 1;
        format!("s{n}")
    }

    /// 预留下一个主机名称。
    pub fn next_host_name(&mut self) -> String {
        let n = self.next_host;
        self.next_host += 1;
        format!("h{n}")
    }

    /// 已经分配出去的交换机名称个数
    pub fn switches_issued(&self) -> u64 {
        self.next_switch
    }

    pub fn hosts_issued(&self) -> u64 {
        self.next_host
    }
}

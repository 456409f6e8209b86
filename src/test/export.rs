use crate::export::{Emulator, OutputFormat, ScriptEmulator, TopologyDump, render, replay};
use crate::net::{LinkOpts, NodeKind, Topology};
use crate::topo::generate;
use std::convert::Infallible;

#[test]
fn replay_emits_nodes_then_links_in_insertion_order() {
    let topo = generate(0, 2).unwrap();
    let mut emu = ScriptEmulator::default();
    let handles = replay(&topo, &mut emu).unwrap();

    assert_eq!(handles, vec!["s0", "h0", "h1"]);
    assert_eq!(
        emu.lines,
        vec![
            "add_switch s0",
            "add_host h0",
            "add_host h1",
            "add_link s0 h0",
            "add_link s0 h1",
        ]
    );
}

#[test]
fn script_includes_link_options() {
    let mut topo = Topology::new();
    let s = topo.add_switch("s1").unwrap();
    let h = topo.add_host("h1").unwrap();
    topo.add_link_with(
        s,
        h,
        LinkOpts {
            bandwidth_mbps: Some(100),
            delay_us: None,
        },
    )
    .unwrap();
    let text = render(&topo, OutputFormat::Script).unwrap();
    assert_eq!(text, "add_switch s1\nadd_host h1\nadd_link s1 h1 bw_mbps=100\n");
}

/// 只接受固定数量调用的仿真器，用于验证出错即停
struct LimitedEmulator {
    calls: usize,
    limit: usize,
}

impl Emulator for LimitedEmulator {
    type Handle = usize;
    type Error = String;

    fn add_host(&mut self, name: &str) -> Result<usize, String> {
        self.call(name)
    }

    fn add_switch(&mut self, name: &str) -> Result<usize, String> {
        self.call(name)
    }

    fn add_link(&mut self, a: &usize, b: &usize) -> Result<(), String> {
        self.call(&format!("{a}-{b}")).map(|_| ())
    }
}

impl LimitedEmulator {
    fn call(&mut self, what: &str) -> Result<usize, String> {
        if self.calls == self.limit {
            return Err(format!("rejected {what}"));
        }
        self.calls += 1;
        Ok(self.calls - 1)
    }
}

#[test]
fn replay_stops_at_first_emulator_error() {
    let topo = generate(0, 2).unwrap();
    let mut emu = LimitedEmulator {
        calls: 0,
        limit: 4,
    };
    let err = replay(&topo, &mut emu).unwrap_err();
    assert_eq!(err, "rejected 0-2");
    assert_eq!(emu.calls, 4);
}

/// 只实现三个基本构建调用的仿真器，按名称记录邻接
#[derive(Default)]
struct PlainEmulator {
    names: Vec<String>,
    kinds: Vec<NodeKind>,
    edges: Vec<(String, String)>,
}

impl Emulator for PlainEmulator {
    type Handle = usize;
    type Error = Infallible;

    fn add_host(&mut self, name: &str) -> Result<usize, Infallible> {
        self.names.push(name.to_string());
        self.kinds.push(NodeKind::Host);
        Ok(self.names.len() - 1)
    }

    fn add_switch(&mut self, name: &str) -> Result<usize, Infallible> {
        self.names.push(name.to_string());
        self.kinds.push(NodeKind::Switch);
        Ok(self.names.len() - 1)
    }

    fn add_link(&mut self, a: &usize, b: &usize) -> Result<(), Infallible> {
        self.edges
            .push((self.names[*a].clone(), self.names[*b].clone()));
        Ok(())
    }
}

#[test]
fn replay_through_three_call_emulator() {
    let mut topo = generate(1, 2).unwrap();
    let mut emu = PlainEmulator::default();
    let handles = match replay(&topo, &mut emu) {
        Ok(h) => h,
        Err(never) => match never {},
    };
    assert_eq!(handles, (0..7).collect::<Vec<_>>());
    assert_eq!(emu.names, vec!["s0", "s1", "h0", "h1", "s2", "h2", "h3"]);
    assert_eq!(emu.kinds.iter().filter(|k| **k == NodeKind::Host).count(), 4);
    assert_eq!(emu.edges.len(), 6);
    assert_eq!(emu.edges[0], ("s0".to_string(), "s1".to_string()));
    assert_eq!(emu.edges[5], ("s2".to_string(), "h3".to_string()));

    // 链路参数对只实现基本调用的仿真器不可见，回放仍然成功
    let s = topo.lookup("s0").unwrap().id();
    let h = topo.add_host(None).unwrap();
    topo.add_link_with(
        s,
        h,
        LinkOpts {
            bandwidth_mbps: Some(10),
            delay_us: Some(1),
        },
    )
    .unwrap();
    let mut emu = PlainEmulator::default();
    assert!(replay(&topo, &mut emu).is_ok());
    assert_eq!(emu.edges.last(), Some(&("s0".to_string(), "h4".to_string())));
}

#[test]
fn dump_lists_nodes_and_links_by_name() {
    let topo = generate(1, 2).unwrap();
    let dump = TopologyDump::from_topology(&topo);
    assert_eq!(dump.nodes.len(), 7);
    assert_eq!(dump.links.len(), 6);
    assert_eq!(dump.nodes[0].name, "s0");
    assert_eq!(dump.nodes[0].kind, NodeKind::Switch);
    assert_eq!(dump.links[0].a, "s0");
    assert_eq!(dump.links[0].b, "s1");

    let v: serde_json::Value =
        serde_json::from_str(&render(&topo, OutputFormat::Json).unwrap()).unwrap();
    assert_eq!(v["nodes"][2]["kind"], "host");
    assert_eq!(v["nodes"][2]["name"], "h0");
    assert!(v["links"][0].get("bandwidth_mbps").is_none());
}

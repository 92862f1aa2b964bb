//! Launch modes and their flag templates.
use clap::ValueEnum;

/// Which external command prefix a mode runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgramKind {
    Claim,
    Mine,
}

/// RPC flags emitted by a mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RpcLayout {
    /// `--rpc <secondary>` only.
    Single,
    /// `--rpc <primary> --rpc2 <secondary>`.
    Dual,
}

/// Static description of one mode's argument vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeTemplate {
    pub program: ProgramKind,
    pub subcommand: &'static str,
    pub rpc: RpcLayout,
    pub concurrency_flag: Option<&'static str>,
    pub priority_fee: u64,
    pub buffer_time: Option<u64>,
}

const CLAIM: ModeTemplate = ModeTemplate {
    program: ProgramKind::Claim,
    subcommand: "claim",
    rpc: RpcLayout::Dual,
    concurrency_flag: None,
    priority_fee: 500_000,
    buffer_time: None,
};

const MINE_A: ModeTemplate = ModeTemplate {
    program: ProgramKind::Mine,
    subcommand: "mine",
    rpc: RpcLayout::Single,
    concurrency_flag: Some("--threads"),
    priority_fee: 100_000,
    buffer_time: None,
};

const MINE_B: ModeTemplate = ModeTemplate {
    program: ProgramKind::Mine,
    subcommand: "mine",
    rpc: RpcLayout::Dual,
    concurrency_flag: Some("--cores"),
    priority_fee: 2_000,
    buffer_time: Some(2),
};

const MINE_C: ModeTemplate = ModeTemplate {
    program: ProgramKind::Mine,
    subcommand: "mine",
    rpc: RpcLayout::Dual,
    concurrency_flag: Some("--threads"),
    priority_fee: 500_000,
    buffer_time: None,
};

/// Launch mode selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Mode {
    /// Claim rewards with two RPC endpoints.
    Claim,
    /// Mine with threads and a single RPC endpoint.
    MineA,
    /// Mine with cores, two RPC endpoints and a buffer time.
    MineB,
    /// Mine with threads and two RPC endpoints.
    MineC,
}

impl Mode {
    pub const ALL: [Mode; 4] = [Mode::Claim, Mode::MineA, Mode::MineB, Mode::MineC];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Mode::Claim => "claim",
            Mode::MineA => "mine-a",
            Mode::MineB => "mine-b",
            Mode::MineC => "mine-c",
        }
    }

    pub const fn template(&self) -> &'static ModeTemplate {
        match self {
            Mode::Claim => &CLAIM,
            Mode::MineA => &MINE_A,
            Mode::MineB => &MINE_B,
            Mode::MineC => &MINE_C,
        }
    }

    pub const fn uses_primary_rpc(&self) -> bool {
        matches!(self.template().rpc, RpcLayout::Dual)
    }

    pub const fn uses_concurrency(&self) -> bool {
        self.template().concurrency_flag.is_some()
    }
}

use serde::Deserialize;

use crate::launcher::Mode;

/// Priority fee and buffer time per mode.
///
/// Defaults reproduce the constants each legacy launcher hard-coded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeesSection {
    pub claim: u64,
    pub mine_a: u64,
    pub mine_b: u64,
    pub mine_c: u64,
    pub buffer_time: u64,
}

impl Default for FeesSection {
    fn default() -> Self {
        Self {
            claim: Mode::Claim.template().priority_fee,
            mine_a: Mode::MineA.template().priority_fee,
            mine_b: Mode::MineB.template().priority_fee,
            mine_c: Mode::MineC.template().priority_fee,
            buffer_time: Mode::MineB.template().buffer_time.unwrap_or_default(),
        }
    }
}

impl FeesSection {
    pub fn priority_fee(&self, mode: Mode) -> u64 {
        match mode {
            Mode::Claim => self.claim,
            Mode::MineA => self.mine_a,
            Mode::MineB => self.mine_b,
            Mode::MineC => self.mine_c,
        }
    }

    /// Buffer time for modes whose template carries one.
    pub fn buffer_time(&self, mode: Mode) -> Option<u64> {
        mode.template().buffer_time.map(|_| self.buffer_time)
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawFeesSection {
    pub claim: Option<u64>,
    pub mine_a: Option<u64>,
    pub mine_b: Option<u64>,
    pub mine_c: Option<u64>,
    pub buffer_time: Option<u64>,
}

pub fn parse_fees_section(raw: Option<RawFeesSection>) -> FeesSection {
    let defaults = FeesSection::default();
    let raw = raw.unwrap_or_default();
    FeesSection {
        claim: raw.claim.unwrap_or(defaults.claim),
        mine_a: raw.mine_a.unwrap_or(defaults.mine_a),
        mine_b: raw.mine_b.unwrap_or(defaults.mine_b),
        mine_c: raw.mine_c.unwrap_or(defaults.mine_c),
        buffer_time: raw.buffer_time.unwrap_or(defaults.buffer_time),
    }
}

pub mod loan;
pub mod recurring;
pub mod single;

use clap::ValueEnum;
use fincalc_core::rates::TenureUnit;

/// CLI-facing mirror of the core tenure unit.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TenureUnitArg {
    Days,
    Months,
    Years,
}

impl From<TenureUnitArg> for TenureUnit {
    fn from(arg: TenureUnitArg) -> Self {
        match arg {
            TenureUnitArg::Days => TenureUnit::Days,
            TenureUnitArg::Months => TenureUnit::Months,
            TenureUnitArg::Years => TenureUnit::Years,
        }
    }
}

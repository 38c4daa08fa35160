//! Contribution figures: how much water was refilled and what that saved

/// Currency units saved per liter refilled
pub const MONEY_FACTOR: f64 = 0.50;

/// Waste units (plastic bottles) avoided per liter refilled
pub const TRASH_FACTOR: f64 = 0.10;

/// Savings derived from a refilled volume
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Savings {
    pub saved_money: f64,
    pub saved_trash: f64,
}

/// Savings for a volume given in ml
pub fn savings(volume_ml: i64) -> Savings {
    let volume = volume_ml as f64;
    Savings {
        saved_money: volume * MONEY_FACTOR / 1000.0,
        saved_trash: volume * TRASH_FACTOR / 1000.0,
    }
}

/// Count and summed volume (ml) of a set of transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransactionTotals {
    pub count: i64,
    pub volume_ml: i64,
}

/// Contribution of a single user
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UserContribution {
    pub amount_fillings: i64,
    pub amount_water: i64,
    pub savings: Savings,
}

impl From<TransactionTotals> for UserContribution {
    fn from(totals: TransactionTotals) -> Self {
        Self {
            amount_fillings: totals.count,
            amount_water: totals.volume_ml,
            savings: savings(totals.volume_ml),
        }
    }
}

/// Contribution of the whole community
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CommunityContribution {
    pub amount_fillings: i64,
    pub amount_water: i64,
    pub amount_user: i64,
    pub savings: Savings,
}

impl CommunityContribution {
    pub fn new(totals: TransactionTotals, amount_user: i64) -> Self {
        Self {
            amount_fillings: totals.count,
            amount_water: totals.volume_ml,
            amount_user,
            savings: savings(totals.volume_ml),
        }
    }
}

/// Number of stations per station type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StationTypeCounts {
    pub smart: i64,
    pub manual: i64,
}

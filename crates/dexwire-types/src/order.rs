//! Order and governance enums with their fixed wire codes.
//!
//! The integer codes are defined by the network and appear both in the
//! protobuf body and in the canonical sign payload.

use serde::{Deserialize, Serialize};

/// Which side of the book this order is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::Buy => 1,
            Self::Sell => 2,
        }
    }
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "BUY"),
            Self::Sell => write!(f, "SELL"),
        }
    }
}

/// The type of order. The matching engine currently only accepts `Limit`;
/// `Market` is encodable so the decision stays with the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum OrderType {
    Market,
    Limit,
}

impl OrderType {
    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::Market => 1,
            Self::Limit => 2,
        }
    }
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Market => write!(f, "MARKET"),
            Self::Limit => write!(f, "LIMIT"),
        }
    }
}

/// How long an order rests on the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeInForce {
    /// Good till expire (GTE).
    GoodTillExpire,
    /// Immediate or cancel (IOC).
    ImmediateOrCancel,
}

impl TimeInForce {
    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::GoodTillExpire => 1,
            Self::ImmediateOrCancel => 3,
        }
    }
}

impl std::fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GoodTillExpire => write!(f, "GTE"),
            Self::ImmediateOrCancel => write!(f, "IOC"),
        }
    }
}

/// Ballot choice on a governance proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoteOption {
    Yes,
    Abstain,
    No,
    NoWithVeto,
}

impl VoteOption {
    /// Signed form, as carried by the protobuf body.
    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::Yes => 1,
            Self::Abstain => 2,
            Self::No => 3,
            Self::NoWithVeto => 4,
        }
    }

    /// Unsigned form, as carried by the canonical sign payload.
    #[must_use]
    pub const fn unsigned_code(self) -> u64 {
        self.code().unsigned_abs()
    }
}

impl std::fmt::Display for VoteOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Yes => write!(f, "YES"),
            Self::Abstain => write!(f, "ABSTAIN"),
            Self::No => write!(f, "NO"),
            Self::NoWithVeto => write!(f, "NO_WITH_VETO"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_codes() {
        assert_eq!(OrderSide::Buy.code(), 1);
        assert_eq!(OrderSide::Sell.code(), 2);
        assert_eq!(OrderType::Limit.code(), 2);
        assert_eq!(TimeInForce::GoodTillExpire.code(), 1);
        assert_eq!(TimeInForce::ImmediateOrCancel.code(), 3);
        assert_eq!(VoteOption::No.code(), 3);
        assert_eq!(VoteOption::NoWithVeto.unsigned_code(), 4);
    }

    #[test]
    fn order_side_display() {
        assert_eq!(format!("{}", OrderSide::Buy), "BUY");
        assert_eq!(format!("{}", OrderSide::Sell), "SELL");
    }

    #[test]
    fn time_in_force_display() {
        assert_eq!(TimeInForce::GoodTillExpire.to_string(), "GTE");
        assert_eq!(TimeInForce::ImmediateOrCancel.to_string(), "IOC");
    }
}

//! Rule-based screening of single transactions for manual fraud review.

use serde::Serialize;
use std::fmt;

/// Amount (EUR) above which a transaction adds to the risk score
const HIGH_AMOUNT: f64 = 500.0;
/// Amount (EUR) that is suspicious when paired with high frequency or a new customer
const VERY_HIGH_AMOUNT: f64 = 1000.0;
/// 24h transaction count that blocks the card outright
const BLOCK_FREQUENCY: u32 = 10;
/// 24h transaction count that counts as high frequency for large amounts
const ELEVATED_FREQUENCY: u32 = 5;
/// Risk score above which a transaction is flagged regardless of other rules
const RISK_SCORE_LIMIT: u32 = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TransactionStatus {
    Normal,
    #[serde(rename = "High Value")]
    HighValue,
    Suspicious,
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionStatus::Normal => "Normal",
            TransactionStatus::HighValue => "High Value",
            TransactionStatus::Suspicious => "Suspicious",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionAssessment {
    pub status: TransactionStatus,
    pub action: String,
    /// Additive heuristic in [0, 100]
    pub risk_score: u32,
}

/// Risk score: +20 over 500 EUR, +30 over 5 transactions in 24h, and a
/// further +50 over 10.
pub fn risk_score(amount: f64, transactions_24h: u32) -> u32 {
    let mut score = 0;
    if amount > HIGH_AMOUNT {
        score += 20;
    }
    if transactions_24h > 5 {
        score += 30;
    }
    if transactions_24h > 10 {
        score += 50;
    }
    score
}

pub fn analyze_transaction(
    amount: f64,
    transactions_24h: u32,
    is_new_customer: bool,
) -> TransactionAssessment {
    let risk_score = risk_score(amount, transactions_24h);

    let (mut status, mut action) = if transactions_24h >= BLOCK_FREQUENCY {
        (
            TransactionStatus::Suspicious,
            "Block card and contact user immediately".to_string(),
        )
    } else if amount >= VERY_HIGH_AMOUNT && transactions_24h >= ELEVATED_FREQUENCY {
        (
            TransactionStatus::Suspicious,
            "Flag for manual review - High value + High frequency".to_string(),
        )
    } else if is_new_customer && amount > VERY_HIGH_AMOUNT {
        (
            TransactionStatus::Suspicious,
            "Flag for manual review - New customer high value purchase".to_string(),
        )
    } else {
        (TransactionStatus::Normal, "No action needed".to_string())
    };

    // A Suspicious verdict from the rules above is never downgraded or reworded
    if risk_score > RISK_SCORE_LIMIT && status != TransactionStatus::Suspicious {
        status = TransactionStatus::Suspicious;
        action = format!("Flag for manual review - High risk score ({})", risk_score);
    } else if status == TransactionStatus::Normal
        && amount >= HIGH_AMOUNT
        && transactions_24h < BLOCK_FREQUENCY
    {
        status = TransactionStatus::HighValue;
        action = "No action - VIP customer behavior".to_string();
    }

    TransactionAssessment {
        status,
        action,
        risk_score,
    }
}

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::core::money::{format_inr, percent};
use crate::modules::clients::models::{BillingModel, Client};
use crate::modules::taxes::models::tax_rules::{GST_RATE_PERCENT, TDS_RATE_PERCENT, TDS_THRESHOLD};

/// Estimated charges for one client per billing cycle (month or project)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargeEstimate {
    pub client_id: String,
    pub client_name: String,
    pub base: Decimal,
    pub gst: Decimal,
    pub tds: Decimal,
    /// base + gst - tds
    pub net: Decimal,
    pub note: String,
}

/// Column totals across all estimates
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargeTotals {
    pub base: Decimal,
    pub gst: Decimal,
    pub tds: Decimal,
    pub net: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargeSheet {
    pub estimates: Vec<ChargeEstimate>,
    pub totals: ChargeTotals,
}

/// Quick per-client GST/TDS estimate from the fixed `amount` alone.
///
/// Unlike invoice aggregation this looks at no time entries and does not
/// round: it is the "what will this client pay me" preview.
pub struct ChargeEstimator;

impl ChargeEstimator {
    pub fn new() -> Self {
        Self
    }

    pub fn estimate(&self, client: &Client, gst_registered: bool) -> ChargeEstimate {
        let base = client.amount;
        let annualized = match client.billing_model {
            BillingModel::Monthly => base.saturating_mul(Decimal::from(12)),
            BillingModel::Hourly | BillingModel::Project => base,
        };

        let gst = if client.domestic && gst_registered {
            base.saturating_mul(percent(GST_RATE_PERCENT))
        } else {
            Decimal::ZERO
        };

        let threshold = Decimal::from(TDS_THRESHOLD);
        let tds_applies = client.tds_deducts && annualized > threshold;
        let tds = if tds_applies {
            base.saturating_mul(percent(TDS_RATE_PERCENT))
        } else {
            Decimal::ZERO
        };

        let note = if tds_applies {
            format!(
                "TDS @{}% applies (est. >{}/yr)",
                TDS_RATE_PERCENT,
                format_inr(threshold)
            )
        } else {
            format!("TDS likely not applicable (≤{}/yr)", format_inr(threshold))
        };

        ChargeEstimate {
            client_id: client.id.clone(),
            client_name: client.name.clone(),
            base,
            gst,
            tds,
            net: base.saturating_add(gst).saturating_sub(tds),
            note,
        }
    }

    pub fn estimate_all(&self, clients: &[Client], gst_registered: bool) -> ChargeSheet {
        let estimates: Vec<ChargeEstimate> = clients
            .iter()
            .map(|client| self.estimate(client, gst_registered))
            .collect();

        let totals = estimates
            .iter()
            .fold(ChargeTotals::default(), |mut acc, e| {
                acc.base = acc.base.saturating_add(e.base);
                acc.gst = acc.gst.saturating_add(e.gst);
                acc.tds = acc.tds.saturating_add(e.tds);
                acc.net = acc.net.saturating_add(e.net);
                acc
            });

        debug!(clients = estimates.len(), net = %totals.net, "Estimated client charges");

        ChargeSheet { estimates, totals }
    }
}

impl Default for ChargeEstimator {
    fn default() -> Self {
        Self::new()
    }
}

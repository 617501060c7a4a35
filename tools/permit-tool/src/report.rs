//! Human/JSON renderings of permits.

use alloy_primitives::U256;
use permit_codec::{
    constants::{MAX_UINT256, MAX_UINT48},
    unpack_vs, CanonicalPermit, CompactPermit, Encoding, PermitVariant,
};
use serde::Serialize;
use serde_json::{json, Value};
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

use crate::input::encode_hex;

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct Classification {
    pub variant: &'static str,
    pub encoding: &'static str,
    pub length: usize,
}

impl Classification {
    pub fn new(variant: PermitVariant, encoding: Encoding, length: usize) -> Self {
        Self { variant: variant.name(), encoding: encoding.name(), length }
    }
}

/// Result of a compress/decompress run.
#[derive(Serialize, Debug)]
pub struct Conversion {
    pub variant: &'static str,
    pub input_len: usize,
    pub output_len: usize,
    pub output: String,
}

/// Render a time field, flagging the "unlimited" maximum and adding a UTC timestamp when the
/// value is a plausible unix time.
pub fn time_field(value: U256, max: U256) -> Value {
    let utc = if value == max { None } else { rfc3339(value) };
    json!({
        "value": value.to_string(),
        "unlimited": value == max,
        "utc": utc,
    })
}

fn rfc3339(value: U256) -> Option<String> {
    if value.bit_len() > 63 {
        return None;
    }
    let secs = value.as_limbs()[0] as i64;
    OffsetDateTime::from_unix_timestamp(secs).ok()?.format(&Rfc3339).ok()
}

pub fn canonical_report(permit: &CanonicalPermit) -> Value {
    let mut report = match permit {
        CanonicalPermit::Standard(call) => json!({
            "owner": call.owner.to_string(),
            "spender": call.spender.to_string(),
            "value": call.value.to_string(),
            "deadline": time_field(call.deadline, MAX_UINT256),
            "v": call.v,
            "r": call.r.to_string(),
            "s": call.s.to_string(),
        }),
        CanonicalPermit::DaiLike(call) => json!({
            "holder": call.holder.to_string(),
            "spender": call.spender.to_string(),
            "nonce": call.nonce.to_string(),
            "expiry": time_field(call.expiry, MAX_UINT256),
            "allowed": call.allowed,
            "v": call.v,
            "r": call.r.to_string(),
            "s": call.s.to_string(),
        }),
        CanonicalPermit::Permit2(call) => {
            let single = &call.permitSingle;
            json!({
                "owner": call.owner.to_string(),
                "token": single.details.token.to_string(),
                "amount": single.details.amount.to_string(),
                "expiration": time_field(U256::from(single.details.expiration), MAX_UINT48),
                "nonce": single.details.nonce.to_string(),
                "spender": single.spender.to_string(),
                "sigDeadline": time_field(single.sigDeadline, MAX_UINT48),
                "signature": encode_hex(&call.signature),
            })
        }
    };
    report["variant"] = json!(permit.variant().name());
    report["encoding"] = json!(Encoding::Canonical.name());
    report["selector"] = json!(encode_hex(&permit.selector()));
    report
}

pub fn compact_report(permit: &CompactPermit) -> Value {
    let mut report = match permit {
        CompactPermit::Standard(p) => json!({
            "value": p.value.to_string(),
            "deadline": time_field(p.deadline(), MAX_UINT256),
        }),
        CompactPermit::DaiLike(p) => json!({
            "nonce": p.nonce,
            "expiry": time_field(p.expiry(), MAX_UINT256),
            "allowed": true,
        }),
        CompactPermit::Permit2(p) => json!({
            "amount": p.amount.to_string(),
            "expiration": time_field(p.expiration(), MAX_UINT48),
            "nonce": p.nonce,
            "sigDeadline": time_field(p.sig_deadline(), MAX_UINT48),
        }),
    };
    let signature = permit.signature();
    report["r"] = json!(signature.r.to_string());
    report["vs"] = json!(signature.vs.to_string());
    if permit.variant() != PermitVariant::Permit2Batch {
        let (v, s) = unpack_vs(signature.vs);
        report["v"] = json!(v);
        report["s"] = json!(s.to_string());
    }
    report["variant"] = json!(permit.variant().name());
    report["encoding"] = json!(Encoding::Compact.name());
    report
}

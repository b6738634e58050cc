// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Freshness window for CRLs (and other thisUpdate/nextUpdate structures).

use super::{encode_time_as_generalized_time, GeneralizedTime};
use crate::error::{Error, Result, TimeError};

/// Check `thisUpdate`/`nextUpdate` against a verification time.
///
/// Fails when the data is not yet valid (`this_update` after the
/// verification time), expired (`next_update` at or before it) or older
/// than `max_age_seconds`. The verification time and the age boundary are
/// converted to [`GeneralizedTime`] before comparing, so every check uses
/// the same calendar representation as the parsed fields.
pub fn check_revocation_date_valid(
    this_update: &GeneralizedTime,
    next_update: Option<&GeneralizedTime>,
    verify_time_epoch_seconds: i64,
    max_age_seconds: Option<i64>,
) -> Result<()> {
    let verify_time = encode_time_as_generalized_time(verify_time_epoch_seconds)?;

    if *this_update > verify_time {
        log::debug!("thisUpdate {} is after {}", this_update, verify_time);
        return Err(Error::not_yet_valid());
    }

    if let Some(next_update) = next_update {
        if *next_update <= verify_time {
            log::debug!("nextUpdate {} is not after {}", next_update, verify_time);
            return Err(Error::expired());
        }
    }

    if let Some(max_age) = max_age_seconds {
        if max_age < 0 {
            return Err(Error::TimeError(TimeError::InvalidMaxAge(max_age)));
        }
        let earliest = verify_time_epoch_seconds
            .checked_sub(max_age)
            .ok_or(Error::TimeError(TimeError::InvalidMaxAge(max_age)))?;
        let earliest_this_update = encode_time_as_generalized_time(earliest)?;
        if *this_update < earliest_this_update {
            log::debug!(
                "thisUpdate {} is before {}",
                this_update,
                earliest_this_update
            );
            return Err(Error::TimeError(TimeError::TooOld));
        }
    }

    Ok(())
}

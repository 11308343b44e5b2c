use chrono::{DateTime, FixedOffset, TimeDelta, Utc};
use log::warn;
use crate::models::forecast::{DinnerTarget, ForecastSample, LocationContext, SelectedForecast};

const LOCAL_TIME_FORMAT: &str = "%Y-%m-%d %H:%M %:z";

/// Returns the next occurrence of the dinner hour in location local time.
///
/// The target is today's dinner hour unless local now is at or past it, in which case
/// it is moved exactly one day ahead. The offset is taken as valid for the whole day
///
/// # Arguments
///
/// * 'now' - the current instant
/// * 'offset' - the location offset from UTC
/// * 'target' - the configured dinner hour
pub fn next_dinner_target(now: DateTime<Utc>, offset: FixedOffset, target: DinnerTarget) -> DateTime<FixedOffset> {
    let local_now = now.with_timezone(&offset);
    let local_candidate = local_now.date_naive().and_time(target.time());

    let mut target_instant = (local_candidate - TimeDelta::seconds(offset.local_minus_utc() as i64))
        .and_utc()
        .with_timezone(&offset);

    if local_now >= target_instant {
        target_instant += TimeDelta::days(1);
    }

    target_instant
}

/// Selects the forecast sample closest in time to the next dinner target.
///
/// Candidates are scanned in order and the sample with the least absolute distance
/// to the target wins, a later sample only replaces the current pick if it is strictly
/// closer. With no candidates the first raw sample is returned flagged as a fallback.
/// Nothing is returned only if both sequences are empty
///
/// # Arguments
///
/// * 'candidates' - samples eligible for selection
/// * 'raw' - the unfiltered provider sequence, used for fallback
/// * 'location' - the location and its utc offset
/// * 'target' - the configured dinner hour
/// * 'now' - the current instant
pub fn select_dinner_forecast(
    candidates: &[ForecastSample],
    raw: &[ForecastSample],
    location: &LocationContext,
    target: DinnerTarget,
    now: DateTime<Utc>) -> Option<SelectedForecast> {

    let offset = location.fixed_offset();
    let target_instant = next_dinner_target(now, offset, target);
    let target_ts = target_instant.timestamp();

    let mut best: Option<(&ForecastSample, i64)> = None;
    for sample in candidates {
        let distance = (sample.instant - target_ts).abs();
        if best.is_none_or(|(_, d)| distance < d) {
            best = Some((sample, distance));
        }
    }

    let (sample, distance, fallback) = match best {
        Some((sample, distance)) => (sample, distance, false),
        None => {
            let sample = raw.first()?;
            warn!("no candidate samples for dinner at {}, falling back to first raw sample",
                target_instant.format(LOCAL_TIME_FORMAT));
            (sample, (sample.instant - target_ts).abs(), true)
        }
    };

    Some(SelectedForecast {
        sample: sample.clone(),
        local_time: local_time_string(sample.instant, offset),
        instant: sample.instant,
        target: target_instant,
        distance_seconds: distance,
        fallback,
    })
}

/// Returns the samples not yet in the past
///
/// # Arguments
///
/// * 'samples' - the provider sequence
/// * 'now' - the current instant
pub fn upcoming_samples(samples: &[ForecastSample], now: DateTime<Utc>) -> Vec<ForecastSample> {
    samples
        .iter()
        .filter(|s| s.instant >= now.timestamp())
        .cloned()
        .collect()
}

/// Formats an epoch instant in the given offset
///
/// # Arguments
///
/// * 'instant' - seconds since the Unix epoch
/// * 'offset' - offset to present the time in
pub fn local_time_string(instant: i64, offset: FixedOffset) -> String {
    DateTime::from_timestamp(instant, 0)
        .map(|dt| dt.with_timezone(&offset).format(LOCAL_TIME_FORMAT).to_string())
        .unwrap_or_else(|| instant.to_string())
}

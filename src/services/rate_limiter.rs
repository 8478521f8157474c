use std::sync::Mutex;
use std::time::Instant;

/// Admission control for expensive operations.
/// Implementations must be safe to call concurrently and must never block.
pub trait RateLimiter: Send + Sync {
    /// Take one permit if immediately available
    fn try_acquire(&self) -> bool;
}

struct Bucket {
    tokens: f64,
    last_refill: Instant,
}

/// Token bucket refilling continuously at `rate_per_second`.
/// Starts full; burst capacity equals one second of throughput (at least one permit).
pub struct TokenBucketLimiter {
    rate_per_second: f64,
    capacity: f64,
    bucket: Mutex<Bucket>,
}

impl TokenBucketLimiter {
    pub fn new(rate_per_second: f64) -> Self {
        let capacity = rate_per_second.max(1.0);
        TokenBucketLimiter {
            rate_per_second,
            capacity,
            bucket: Mutex::new(Bucket {
                tokens: capacity,
                last_refill: Instant::now(),
            }),
        }
    }

    pub fn rate_per_second(&self) -> f64 {
        self.rate_per_second
    }

    fn try_acquire_at(&self, now: Instant) -> bool {
        // A poisoned lock only means another caller panicked mid-update;
        // the bucket fields are still plain numbers.
        let mut bucket = self
            .bucket
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let elapsed = now.saturating_duration_since(bucket.last_refill).as_secs_f64();
        bucket.tokens = (bucket.tokens + elapsed * self.rate_per_second).min(self.capacity);
        bucket.last_refill = now.max(bucket.last_refill);

        if bucket.tokens >= 1.0 {
            bucket.tokens -= 1.0;
            true
        } else {
            false
        }
    }
}

impl RateLimiter for TokenBucketLimiter {
    fn try_acquire(&self) -> bool {
        self.try_acquire_at(Instant::now())
    }
}

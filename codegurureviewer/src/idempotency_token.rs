/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::sync::{Arc, Mutex};

pub(crate) fn uuid_v4(input: u128) -> String {
    let mut out = String::with_capacity(36);
    // u4-aligned index into [input]
    let mut rnd_idx: u8 = 0;
    const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

    for str_idx in 0..36 {
        if str_idx == 8 || str_idx == 13 || str_idx == 18 || str_idx == 23 {
            out.push('-');
        // UUID version character
        } else if str_idx == 14 {
            out.push('4');
        } else {
            let mut dat: u8 = ((input >> (rnd_idx * 4)) & 0x0F) as u8;
            // UUID variant bits
            if str_idx == 19 {
                dat |= 0b00001000;
            }
            rnd_idx += 1;
            out.push(HEX_CHARS[dat as usize] as char);
        }
    }
    out
}

/// Source of client tokens for members that must be unique per request.
pub trait MakeIdempotencyToken: Send + Sync {
    fn make_idempotency_token(&self) -> String;
}

pub(crate) type IdempotencyTokenProvider = Arc<dyn MakeIdempotencyToken>;

pub(crate) fn default_provider() -> IdempotencyTokenProvider {
    Arc::new(Mutex::new(fastrand::Rng::new()))
}

impl MakeIdempotencyToken for Mutex<fastrand::Rng> {
    fn make_idempotency_token(&self) -> String {
        let input: u128 = match self.lock() {
            Ok(rng) => rng.u128(..),
            Err(poisoned) => poisoned.into_inner().u128(..),
        };
        uuid_v4(input)
    }
}

impl MakeIdempotencyToken for &'static str {
    fn make_idempotency_token(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod test {
    use super::{default_provider, uuid_v4, MakeIdempotencyToken};

    #[test]
    fn uuid_has_version_and_variant() {
        let uuid = uuid_v4(0);
        assert_eq!(uuid, "00000000-0000-4000-8000-000000000000");
        let uuid = uuid_v4(u128::MAX);
        assert_eq!(uuid, "ffffffff-ffff-4fff-ffff-ffffffffffff");
    }

    #[test]
    fn default_provider_makes_distinct_tokens() {
        let provider = default_provider();
        let first = provider.make_idempotency_token();
        let second = provider.make_idempotency_token();
        assert_eq!(first.len(), 36);
        assert_eq!(&first[14..15], "4");
        assert_ne!(first, second);
    }

    #[test]
    fn static_tokens() {
        assert_eq!("00000000-0000-4000-8000-000000000000".make_idempotency_token(), "00000000-0000-4000-8000-000000000000");
    }
}

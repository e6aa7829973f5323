use num_integer::div_rem;

pub const BPS_DENOMINATOR: u128 = 10_000;
pub const PPM_DENOMINATOR: u128 = 1_000_000;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Split {
    pub ops_amount: u128,
    pub beneficiary_amount: u128,
    pub verifier_reward: u128,
    pub managers_reward: u128,
    pub ops_remainder: u128,
}

/// floor(amount * numerator / denominator) without overflowing on large amounts
pub fn mul_div_floor(amount: u128, numerator: u128, denominator: u128) -> u128 {
    let (quotient, remainder) = div_rem(amount, denominator);
    quotient * numerator + (remainder * numerator) / denominator
}

/// `ops_keep_bps` and `reward_ppm` must have gone through `are_params_valid`, otherwise the
/// rewards could be bigger than the ops amount.
/// With no managers the manager pool stays with the founder.
pub fn calculate_split(amount: u128, ops_keep_bps: u32, reward_ppm: u32, managers: u32) -> Split {
    let ops_amount: u128 = mul_div_floor(amount, ops_keep_bps as u128, BPS_DENOMINATOR);
    let reward: u128 = mul_div_floor(amount, reward_ppm as u128, PPM_DENOMINATOR);
    let managers_reward: u128 = if managers == 0 { 0 } else { reward };

    Split {
        ops_amount,
        beneficiary_amount: amount - ops_amount,
        verifier_reward: reward,
        managers_reward,
        ops_remainder: ops_amount - reward - managers_reward,
    }
}

/// Even share of the pool for the manager at `index` in the roster. The first
/// `pool % managers` managers get one extra unit.
pub fn manager_share(pool: u128, managers: u32, index: u32) -> u128 {
    if managers == 0 {
        return 0;
    }

    let (share, remainder) = div_rem(pool, managers as u128);
    if (index as u128) < remainder {
        share + 1
    } else {
        share
    }
}

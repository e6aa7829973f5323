use soroban_sdk::{Address, Vec};

pub fn has_duplicates(addresses: &Vec<Address>) -> bool {
    for (index, address) in addresses.iter().enumerate() {
        if addresses
            .first_index_of(&address)
            .map_or(false, |first| first as usize != index)
        {
            return true;
        }
    }

    false
}

/// Removed managers keep their record until they claim their stake, a new term never shortens the old one
pub fn renewed_term_end(current: u64, requested: u64) -> u64 {
    if requested > current {
        requested
    } else {
        current
    }
}

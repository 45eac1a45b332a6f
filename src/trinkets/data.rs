use super::types::{Trinket, TrinketId, TrinketRarity};

macro_rules! trinket {
    ($id:ident, $key:literal, $name:literal, $rarity:ident) => {
        Trinket {
            id: TrinketId::$id,
            key: $key,
            name: $name,
            rarity: TrinketRarity::$rarity,
        }
    };
}

/// All trinkets, in `TrinketId` declaration order.
pub static TRINKETS: [Trinket; 20] = [
    trinket!(Dante, "trinket.dante", "Dante", Common),
    trinket!(Don, "trinket.don", "Don Quixote", Common),
    trinket!(Faust, "trinket.faust", "Faust", Common),
    trinket!(Gregor, "trinket.gregor", "Gregor", Common),
    trinket!(Heathcliff, "trinket.heathcliff", "Heathcliff", Common),
    trinket!(HongLu, "trinket.hong-lu", "Hong Lu", Common),
    trinket!(Ishmael, "trinket.ishmael", "Ishmael", Common),
    trinket!(Meursault, "trinket.meursault", "Meursault", Common),
    trinket!(Outis, "trinket.outis", "Outis", Rare),
    trinket!(Rodion, "trinket.rodion", "Rodion", Special),
    trinket!(Ryoshu, "trinket.ryoshu", "Ryoshu", Common),
    trinket!(Sinclair, "trinket.sinclair", "Sinclair", Common),
    trinket!(Cathy, "trinket.cathy", "Cathy", Special),
    trinket!(Erlking, "trinket.erlking", "Erlking", Special),
    trinket!(XiaojinCall, "trinket.xiaojin-call", "Xiao's Call", Special),
    trinket!(CopiumElder, "trinket.copium-elder", "Copium Elder", Rare),
    trinket!(Ayin, "trinket.ayin", "Ayin", Rare),
    trinket!(FaustDerp, "trinket.faust-derp", "Derpy Faust", Rare),
    trinket!(IshmaelSad, "trinket.ishmael-sad", "Sad Ishmael", Rare),
    trinket!(ArayaWatermellon, "trinket.araya-watermellon", "Araya's Watermelon", Special),
];

pub fn trinket(id: TrinketId) -> &'static Trinket {
    &TRINKETS[id as usize]
}

/// Trinkets of one rarity, sorted by key.
pub fn trinkets_by_rarity(rarity: TrinketRarity) -> Vec<TrinketId> {
    let mut ids: Vec<&Trinket> = TRINKETS.iter().filter(|t| t.rarity == rarity).collect();
    ids.sort_by_key(|t| t.key);
    ids.into_iter().map(|t| t.id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_matches_ids() {
        for (index, entry) in TRINKETS.iter().enumerate() {
            assert_eq!(entry.id as usize, index);
            let json = serde_json::to_string(&entry.id).unwrap();
            assert_eq!(json, format!("\"{}\"", entry.key));
        }
    }

    #[test]
    fn test_rarity_counts() {
        assert_eq!(trinkets_by_rarity(TrinketRarity::Common).len(), 10);
        assert_eq!(trinkets_by_rarity(TrinketRarity::Rare).len(), 5);
        assert_eq!(trinkets_by_rarity(TrinketRarity::Special).len(), 5);
    }

    #[test]
    fn test_groups_sorted_by_key() {
        let common = trinkets_by_rarity(TrinketRarity::Common);
        assert_eq!(common.first(), Some(&TrinketId::Dante));
        assert_eq!(common.last(), Some(&TrinketId::Sinclair));
        let keys: Vec<&str> = common.iter().map(|id| id.key()).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }
}

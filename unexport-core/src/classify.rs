//! Used/unused partitioning of candidates.

use crate::ledger::UsageLedger;
use crate::model::Identifier;

/// Returns every candidate with no recorded external reference.
///
/// Sorted by name, then by defining position, so two runs over the same
/// program always emit identical output.
pub fn unused(ledger: &UsageLedger) -> Vec<Identifier> {
    partition(ledger, false)
}

/// Returns every candidate with at least one recorded external reference.
pub fn used(ledger: &UsageLedger) -> Vec<Identifier> {
    partition(ledger, true)
}

fn partition(ledger: &UsageLedger, want_used: bool) -> Vec<Identifier> {
    let mut out: Vec<Identifier> = ledger
        .records()
        .filter(|r| r.is_used() == want_used)
        .map(|r| r.ident().clone())
        .collect();
    out.sort_by(|a, b| {
        a.name
            .cmp(&b.name)
            .then_with(|| a.position.cmp(&b.position))
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Position, Symbol, SymbolKind};

    fn candidate(name: &str, offset: u32) -> Identifier {
        Identifier::new(
            name,
            SymbolKind::Function,
            Position::new("target/lib.x", offset, 1),
        )
    }

    #[test]
    fn test_partition_covers_all_candidates() {
        let a = candidate("Alpha", 10);
        let b = candidate("Beta", 20);
        let c = candidate("Gamma", 30);
        let ledger = UsageLedger::new(vec![a.clone(), b.clone(), c.clone()]);

        ledger.record(
            &b.position,
            Position::new("other/main.x", 5, 2),
            Symbol {
                name: b.name.clone(),
                kind: b.kind,
                module_path: "example.com/target".to_string(),
                position: b.position.clone(),
                receiver: None,
            },
        );

        let used = used(&ledger);
        let unused = unused(&ledger);
        assert_eq!(used.len() + unused.len(), ledger.len());
        assert_eq!(used.iter().map(|i| i.name.as_str()).collect::<Vec<_>>(), ["Beta"]);
        assert_eq!(
            unused.iter().map(|i| i.name.as_str()).collect::<Vec<_>>(),
            ["Alpha", "Gamma"]
        );
    }

    #[test]
    fn test_stable_order_by_name_then_position() {
        // Same name at two positions plus an earlier name.
        let a1 = candidate("Same", 50);
        let a2 = candidate("Same", 10);
        let b = candidate("Earlier", 99);
        let ledger = UsageLedger::new(vec![a1, a2, b]);

        let unused = unused(&ledger);
        let keys: Vec<(String, u32)> = unused
            .iter()
            .map(|i| (i.name.clone(), i.position.offset))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("Earlier".to_string(), 99),
                ("Same".to_string(), 10),
                ("Same".to_string(), 50),
            ]
        );
    }
}

use hash_cache::{Table, TablePolicy};
use test_log::test;

#[derive(Debug, PartialEq)]
struct Property {
    name: String,
    score: u64,
}

struct ByName;

impl TablePolicy<Property> for ByName {
    fn key_of<'a>(&self, value: &'a Property) -> &'a [u8] {
        value.name.as_bytes()
    }
}

#[test]
fn table_insert_search_round_trip() -> hash_cache::Result<()> {
    let keys = (0..50u32).map(|n| format!("key{n}")).collect::<Vec<_>>();

    let mut table = Table::with_capacity(100)?;

    for key in &keys {
        table.insert(key.as_str())?;
    }

    for key in &keys {
        assert_eq!(Some(&key.as_str()), table.search(key.as_bytes()));
    }

    assert_eq!(None, table.search(b"never inserted"));
    assert_eq!(50, table.len());

    Ok(())
}

#[test]
fn table_growth_preserves_membership() -> hash_cache::Result<()> {
    let mut table = Table::with_capacity(4)?;
    let initial_m = table.capacity();

    let keys = (0..1_000u32).map(|n| format!("key{n}")).collect::<Vec<_>>();

    for key in &keys {
        table.insert(key.as_str())?;
    }

    assert!(table.capacity() > initial_m);

    for key in &keys {
        assert_eq!(Some(&key.as_str()), table.search(key.as_bytes()));
    }

    Ok(())
}

#[test]
fn table_iteration_skips_empty_slots() -> hash_cache::Result<()> {
    let mut table = Table::with_capacity(32)?;

    table.insert("jake")?;
    table.insert("finn")?;
    table.insert("bmo")?;

    let values = table.iter().copied().collect::<Vec<_>>();
    assert_eq!(3, values.len());

    for name in ["jake", "finn", "bmo"] {
        assert!(values.contains(&name));
    }

    // indexed iteration visits occupied slots in slot order
    let indices = table.iter_indexed().map(|(idx, _)| idx).collect::<Vec<_>>();
    assert!(indices.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(indices.iter().all(|&idx| idx < table.capacity()));

    Ok(())
}

#[test]
fn table_key_extraction_policy() -> hash_cache::Result<()> {
    let mut table = Table::with_policy(16, ByName)?;

    table.insert(Property {
        name: "width".into(),
        score: 640,
    })?;
    table.insert(Property {
        name: "height".into(),
        score: 480,
    })?;

    assert_eq!(Some(640), table.search(b"width").map(|p| p.score));
    assert_eq!(Some(480), table.search(b"height").map(|p| p.score));
    assert_eq!(None, table.search(b"depth"));

    Ok(())
}

#[test]
fn table_load_stays_bounded() -> hash_cache::Result<()> {
    let keys = (0..500u32).map(|n| format!("key{n}")).collect::<Vec<_>>();

    let mut table = Table::with_capacity(8)?;

    for key in &keys {
        table.insert(key.as_str())?;

        // growth keeps occupancy at or below 3/4
        assert!(table.len() * 4 <= table.capacity() * 3);
    }

    Ok(())
}

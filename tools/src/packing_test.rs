use super::*;

#[test]
fn status_cycle_is_deterministic() {
    let start = ItemStatus::NotNeeded;
    assert_eq!(start.next(), ItemStatus::NeedToBuy);
    assert_eq!(start.next().next(), ItemStatus::Owned);
    assert_eq!(start.next().next().next(), ItemStatus::NotNeeded);
}

#[test]
fn new_list_starts_not_needed() {
    let list = PackingList::new();
    for tab in PackingTab::ALL {
        let counts = list.summary(tab);
        assert_eq!(counts.not_needed, tab.default_items().len());
        assert_eq!(counts.owned, 0);
        assert_eq!(counts.need_to_buy, 0);
    }
}

#[test]
fn cycle_moves_single_item() {
    let mut list = PackingList::new();
    assert_eq!(list.cycle(PackingTab::Documents, 0), Some(ItemStatus::NeedToBuy));
    assert_eq!(list.cycle(PackingTab::Documents, 0), Some(ItemStatus::Owned));
    assert_eq!(list.items(PackingTab::Documents)[0].status, ItemStatus::Owned);
    assert_eq!(list.items(PackingTab::Documents)[1].status, ItemStatus::NotNeeded);
}

#[test]
fn cycle_out_of_range_is_noop() {
    let mut list = PackingList::new();
    let before = list.clone();
    assert_eq!(list.cycle(PackingTab::Clothing, 999), None);
    assert_eq!(list, before);
}

#[test]
fn counts_always_sum_to_item_total() {
    let mut list = PackingList::new();
    for tab in PackingTab::ALL {
        let len = list.items(tab).len();
        for step in 0..(len * 3) {
            list.cycle(tab, (step * 7) % len);
            let counts = list.summary(tab);
            assert_eq!(counts.total(), len);
        }
    }
}

#[test]
fn reset_restores_tab_only() {
    let mut list = PackingList::new();
    list.cycle(PackingTab::Electronics, 0);
    list.cycle(PackingTab::Toiletries, 0);
    list.reset(PackingTab::Electronics);
    assert_eq!(list.summary(PackingTab::Electronics).need_to_buy, 0);
    assert_eq!(list.summary(PackingTab::Toiletries).need_to_buy, 1);
}

#[test]
fn csv_export_lists_current_tab() {
    let mut list = PackingList::new();
    list.cycle(PackingTab::Electronics, 0);
    list.cycle(PackingTab::Electronics, 1);
    list.cycle(PackingTab::Electronics, 1);
    let csv = list.to_csv(PackingTab::Electronics).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("Item,Status"));
    assert_eq!(lines.next(), Some("Laptop,Need to buy"));
    assert_eq!(lines.next(), Some("Phone,Owned"));
    assert_eq!(csv.lines().count(), PackingTab::Electronics.default_items().len() + 1);
}

#[test]
fn csv_export_keeps_item_names() {
    let list = PackingList::new();
    let csv = list.to_csv(PackingTab::Clothing).unwrap();
    assert!(csv.contains("Gloves and scarf,Not needed"));
    let docs = list.to_csv(PackingTab::Documents).unwrap();
    assert!(docs.contains("I-20 / CAS / CoE,Not needed"));
}

#[test]
fn csv_file_name_is_lowercase() {
    assert_eq!(PackingTab::Documents.csv_file_name(), "packing-list-documents.csv");
}

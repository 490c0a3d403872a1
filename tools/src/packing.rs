//! Packing checklist for students flying out.
//!
//! Each item is in one of three states and a click moves it to the next one
//! in a fixed cycle. Counts are derived on demand, so they always add up to
//! the number of items in the tab.

#[cfg(test)]
#[path = "packing_test.rs"]
mod packing_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ToolError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    #[default]
    NotNeeded,
    NeedToBuy,
    Owned,
}

impl ItemStatus {
    /// Next state in the click cycle.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::NotNeeded => Self::NeedToBuy,
            Self::NeedToBuy => Self::Owned,
            Self::Owned => Self::NotNeeded,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::NotNeeded => "Not needed",
            Self::NeedToBuy => "Need to buy",
            Self::Owned => "Owned",
        }
    }

    /// CSS modifier used by the checklist rows.
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::NotNeeded => "not-needed",
            Self::NeedToBuy => "need-to-buy",
            Self::Owned => "owned",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackingTab {
    Documents,
    Clothing,
    Electronics,
    Toiletries,
    Essentials,
}

impl PackingTab {
    pub const ALL: [PackingTab; 5] = [
        PackingTab::Documents,
        PackingTab::Clothing,
        PackingTab::Electronics,
        PackingTab::Toiletries,
        PackingTab::Essentials,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Documents => "Documents",
            Self::Clothing => "Clothing",
            Self::Electronics => "Electronics",
            Self::Toiletries => "Toiletries",
            Self::Essentials => "Essentials",
        }
    }

    /// File name offered when exporting this tab.
    #[must_use]
    pub fn csv_file_name(self) -> String {
        format!("packing-list-{}.csv", self.label().to_ascii_lowercase())
    }

    #[must_use]
    pub fn default_items(self) -> &'static [&'static str] {
        match self {
            Self::Documents => &[
                "Passport",
                "Student visa",
                "University offer letter",
                "I-20 / CAS / CoE",
                "Loan sanction letter",
                "Academic transcripts",
                "Passport photos",
                "Travel insurance",
                "Vaccination records",
                "Forex card",
            ],
            Self::Clothing => &[
                "Winter jacket",
                "Thermal wear",
                "Formal outfit",
                "Casual shirts",
                "Jeans",
                "Walking shoes",
                "Socks",
                "Gloves and scarf",
                "Ethnic wear",
            ],
            Self::Electronics => &[
                "Laptop",
                "Phone",
                "Chargers",
                "Universal adapter",
                "Power bank",
                "Headphones",
                "External drive",
            ],
            Self::Toiletries => &[
                "Toothbrush and paste",
                "Shampoo",
                "Soap",
                "Deodorant",
                "Razor",
                "Medicines and prescriptions",
                "First-aid kit",
            ],
            Self::Essentials => &[
                "Pressure cooker",
                "Spices",
                "Bedsheets",
                "Towels",
                "Stationery",
                "Umbrella",
                "Water bottle",
                "Padlock",
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackingItem {
    pub name: String,
    pub status: ItemStatus,
}

/// Per-status totals for one tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub owned: usize,
    pub need_to_buy: usize,
    pub not_needed: usize,
}

impl StatusCounts {
    #[must_use]
    pub fn total(&self) -> usize {
        self.owned + self.need_to_buy + self.not_needed
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackingList {
    tabs: BTreeMap<PackingTab, Vec<PackingItem>>,
}

impl Default for PackingList {
    fn default() -> Self {
        Self::new()
    }
}

impl PackingList {
    /// Every predefined item in every tab, all `NotNeeded`.
    #[must_use]
    pub fn new() -> Self {
        let tabs = PackingTab::ALL.into_iter().map(|tab| (tab, seed_items(tab))).collect();
        Self { tabs }
    }

    #[must_use]
    pub fn items(&self, tab: PackingTab) -> &[PackingItem] {
        self.tabs.get(&tab).map(Vec::as_slice).unwrap_or_default()
    }

    /// Advance item `index` of `tab` to its next status. Out-of-range is a no-op.
    pub fn cycle(&mut self, tab: PackingTab, index: usize) -> Option<ItemStatus> {
        let item = self.tabs.get_mut(&tab)?.get_mut(index)?;
        item.status = item.status.next();
        Some(item.status)
    }

    pub fn reset(&mut self, tab: PackingTab) {
        self.tabs.insert(tab, seed_items(tab));
    }

    #[must_use]
    pub fn summary(&self, tab: PackingTab) -> StatusCounts {
        self.items(tab).iter().fold(StatusCounts::default(), |mut counts, item| {
            match item.status {
                ItemStatus::Owned => counts.owned += 1,
                ItemStatus::NeedToBuy => counts.need_to_buy += 1,
                ItemStatus::NotNeeded => counts.not_needed += 1,
            }
            counts
        })
    }

    /// Serialize one tab as `Item,Status` CSV.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::Csv`] if the writer fails.
    pub fn to_csv(&self, tab: PackingTab) -> Result<String, ToolError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(["Item", "Status"]).map_err(|e| ToolError::Csv(e.to_string()))?;
        for item in self.items(tab) {
            writer
                .write_record([item.name.as_str(), item.status.label()])
                .map_err(|e| ToolError::Csv(e.to_string()))?;
        }
        let bytes = writer.into_inner().map_err(|e| ToolError::Csv(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| ToolError::Csv(e.to_string()))
    }
}

fn seed_items(tab: PackingTab) -> Vec<PackingItem> {
    tab.default_items()
        .iter()
        .map(|name| PackingItem { name: (*name).to_owned(), status: ItemStatus::NotNeeded })
        .collect()
}

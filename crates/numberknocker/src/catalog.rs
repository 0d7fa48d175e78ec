//! Built-in opt-out catalog.
//!
//! The removal sites, do-not-call registries, call-blocking instructions and
//! monitoring checklist are fixed. Order matters: the guide walks each list
//! front to back.

use serde::Serialize;

/// A data-broker or registry page where a number can be removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RemovalSite {
    /// Display name of the site.
    pub name: &'static str,
    /// Opt-out page.
    pub url: &'static str,
    /// Whether removal can be submitted without user interaction.
    pub automated: bool,
    /// What the opt-out achieves.
    pub description: &'static str,
}

/// A government do-not-call registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Registry {
    /// Display name of the registry.
    pub name: &'static str,
    /// Registration website.
    pub url: &'static str,
    /// Registration phone line.
    pub phone: &'static str,
}

/// Call-blocking steps for one kind of device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlockingInstructions {
    /// Device family.
    pub device: &'static str,
    /// Steps in the order they should be tried.
    pub steps: &'static [&'static str],
}

const REMOVAL_SITES: &[RemovalSite] = &[
    RemovalSite {
        name: "National Do Not Call Registry",
        url: "https://www.donotcall.gov/",
        automated: false,
        description: "Register to reduce telemarketing calls",
    },
    RemovalSite {
        name: "Whitepages",
        url: "https://www.whitepages.com/suppression_requests",
        automated: false,
        description: "Request removal from Whitepages directory",
    },
    RemovalSite {
        name: "Spokeo",
        url: "https://www.spokeo.com/optout",
        automated: false,
        description: "Opt out of Spokeo people search",
    },
    RemovalSite {
        name: "BeenVerified",
        url: "https://www.beenverified.com/app/optout/search",
        automated: false,
        description: "Remove from BeenVerified database",
    },
    RemovalSite {
        name: "PeopleFinder",
        url: "https://www.peoplefinder.com/manage/",
        automated: false,
        description: "Manage PeopleFinder listing",
    },
];

const REGISTRIES: &[Registry] = &[
    Registry {
        name: "National Do Not Call Registry (US)",
        url: "https://www.donotcall.gov/",
        phone: "1-888-382-1222",
    },
    Registry {
        name: "Canadian Do Not Call List",
        url: "https://www.lnnte-dncl.gc.ca/en",
        phone: "1-866-580-3625",
    },
];

const BLOCKING_INSTRUCTIONS: &[BlockingInstructions] = &[
    BlockingInstructions {
        device: "iOS",
        steps: &[
            "Settings > Phone > Silence Unknown Callers",
            "Settings > Phone > Blocked Contacts",
            "Download apps like RoboKiller, Hiya, or Truecaller",
        ],
    },
    BlockingInstructions {
        device: "Android",
        steps: &[
            "Phone app > Settings > Blocked numbers",
            "Enable Google spam protection",
            "Download apps like Truecaller, RoboKiller, or Call Control",
        ],
    },
    BlockingInstructions {
        device: "Landline",
        steps: &[
            "Contact your phone provider about call blocking services",
            "Consider devices like CPR V5000 Call Blocker",
            "Use *77 (varies by provider) to block anonymous calls",
        ],
    },
];

const CHECKLIST_ITEMS: &[&str] = &[
    "Monthly Googles searchs for your Number",
    "Check major people search sites quarterly",
    "Be cautious with sharing your number online",
    "Use alternative numbers for online accounts, when possible",
    "Consider a Google Voice number for non-essential uses",
    "Report persistent spam to FTC (reportfraud.ftc.gov)",
];

/// Data-broker opt-out pages, in the order they are offered.
#[must_use]
pub fn removal_sites() -> &'static [RemovalSite] {
    REMOVAL_SITES
}

/// Do-not-call registries.
#[must_use]
pub fn registries() -> &'static [Registry] {
    REGISTRIES
}

/// Call-blocking instructions grouped by device.
#[must_use]
pub fn blocking_instructions() -> &'static [BlockingInstructions] {
    BLOCKING_INSTRUCTIONS
}

/// Monitoring checklist items.
#[must_use]
pub fn checklist_items() -> &'static [&'static str] {
    CHECKLIST_ITEMS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removal_sites_order() {
        let names: Vec<_> = removal_sites().iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            vec![
                "National Do Not Call Registry",
                "Whitepages",
                "Spokeo",
                "BeenVerified",
                "PeopleFinder",
            ]
        );
    }

    #[test]
    fn test_removal_sites_are_manual_https() {
        for site in removal_sites() {
            assert!(!site.automated, "{} should be manual", site.name);
            assert!(site.url.starts_with("https://"), "{}", site.url);
            assert!(!site.description.is_empty());
        }
    }

    #[test]
    fn test_registries() {
        let registries = registries();
        assert_eq!(registries.len(), 2);
        assert_eq!(registries[0].phone, "1-888-382-1222");
        assert_eq!(registries[1].url, "https://www.lnnte-dncl.gc.ca/en");
    }

    #[test]
    fn test_blocking_instructions() {
        let devices: Vec<_> = blocking_instructions().iter().map(|b| b.device).collect();
        assert_eq!(devices, vec!["iOS", "Android", "Landline"]);
        assert!(blocking_instructions().iter().all(|b| b.steps.len() == 3));
    }

    #[test]
    fn test_checklist_items() {
        assert_eq!(checklist_items().len(), 6);
        assert_eq!(
            checklist_items()[5],
            "Report persistent spam to FTC (reportfraud.ftc.gov)"
        );
    }

    #[test]
    fn test_removal_site_serialize() {
        let json = serde_json::to_string(&removal_sites()[2]).unwrap();
        assert!(json.contains("\"name\":\"Spokeo\""));
        assert!(json.contains("\"automated\":false"));
    }
}

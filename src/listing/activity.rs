//! Dashboard content: quick stats, the recent activity feed and artisan tips

use chrono::Timelike;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Added,
    Sold,
    Viewed,
    Liked,
}

impl ActivityKind {
    pub fn glyph(&self) -> &'static str {
        match self {
            ActivityKind::Added => "+",
            ActivityKind::Sold => "$",
            ActivityKind::Viewed => "◎",
            ActivityKind::Liked => "♥",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityItem {
    pub kind: ActivityKind,
    pub action: &'static str,
    pub item: &'static str,
    pub timestamp: &'static str,
}

pub fn recent_activity() -> Vec<ActivityItem> {
    vec![
        ActivityItem {
            kind: ActivityKind::Added,
            action: "You added",
            item: "Handcrafted Ceramic Bowl",
            timestamp: "2 hours ago",
        },
        ActivityItem {
            kind: ActivityKind::Viewed,
            action: "Someone viewed",
            item: "Sterling Silver Pendant",
            timestamp: "4 hours ago",
        },
        ActivityItem {
            kind: ActivityKind::Sold,
            action: "You sold",
            item: "Wooden Cutting Board",
            timestamp: "1 day ago",
        },
        ActivityItem {
            kind: ActivityKind::Liked,
            action: "Someone liked",
            item: "Macrame Wall Hanging",
            timestamp: "2 days ago",
        },
        ActivityItem {
            kind: ActivityKind::Added,
            action: "You added",
            item: "Clay Pottery Bowl",
            timestamp: "3 days ago",
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickStat {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
}

pub fn quick_stats() -> [QuickStat; 3] {
    [
        QuickStat {
            title: "Total Products",
            value: "12",
            change: "+2 this month",
        },
        QuickStat {
            title: "Total Views",
            value: "3,247",
            change: "+18% from last month",
        },
        QuickStat {
            title: "Total Sales",
            value: "$1,284",
            change: "+12% from last month",
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tip {
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
}

pub const TIPS: &[Tip] = &[
    Tip {
        title: "Optimize Your Product Photos",
        description: "Use natural lighting and show multiple angles. Products with 3+ photos get 40% more views.",
        category: "Photography",
    },
    Tip {
        title: "Write Compelling Descriptions",
        description: "Include the story behind your piece, materials used, and dimensions. Personal stories increase engagement by 60%.",
        category: "Writing",
    },
    Tip {
        title: "Price Competitively",
        description: "Research similar items in your category. Consider your time, materials, and skill level when pricing.",
        category: "Pricing",
    },
    Tip {
        title: "Use Relevant Keywords",
        description: "Include terms customers search for: \"handmade\", \"artisan\", \"custom\", and material names.",
        category: "SEO",
    },
    Tip {
        title: "Respond to Inquiries Quickly",
        description: "Fast responses increase sales probability by 50%. Aim to reply within 24 hours.",
        category: "Customer Service",
    },
];

/// Wrapping cursor over [`TIPS`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TipCarousel {
    index: usize,
}

impl TipCarousel {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &'static Tip {
        &TIPS[self.index]
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % TIPS.len();
    }

    pub fn prev(&mut self) {
        self.index = (self.index + TIPS.len() - 1) % TIPS.len();
    }

    pub fn select(&mut self, index: usize) {
        if index < TIPS.len() {
            self.index = index;
        }
    }
}

/// Greeting for the given local hour
pub fn greeting_for_hour(hour: u32) -> &'static str {
    match hour {
        5..=11 => "Good morning",
        12..=16 => "Good afternoon",
        17..=21 => "Good evening",
        _ => "Welcome back",
    }
}

pub fn greeting(name: &str) -> String {
    let hour = chrono::Local::now().hour();
    format!("{}, {}!", greeting_for_hour(hour), name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carousel_wraps_both_ways() {
        let mut carousel = TipCarousel::default();
        carousel.prev();
        assert_eq!(carousel.index(), TIPS.len() - 1);
        carousel.next();
        assert_eq!(carousel.index(), 0);

        for _ in 0..TIPS.len() {
            carousel.next();
        }
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.current().category, "Photography");
    }

    #[test]
    fn test_carousel_select_ignores_out_of_range() {
        let mut carousel = TipCarousel::default();
        carousel.select(3);
        assert_eq!(carousel.current().title, "Use Relevant Keywords");
        carousel.select(99);
        assert_eq!(carousel.index(), 3);
    }

    #[test]
    fn test_greeting_by_hour() {
        assert_eq!(greeting_for_hour(7), "Good morning");
        assert_eq!(greeting_for_hour(12), "Good afternoon");
        assert_eq!(greeting_for_hour(19), "Good evening");
        assert_eq!(greeting_for_hour(2), "Welcome back");
    }

    #[test]
    fn test_feed_and_stats() {
        let feed = recent_activity();
        assert_eq!(feed.len(), 5);
        assert_eq!(feed[2].kind, ActivityKind::Sold);

        let stats = quick_stats();
        assert_eq!(stats[0].value, "12");
        assert_eq!(stats[1].value, "3,247");
        assert_eq!(stats[2].value, "$1,284");
    }
}

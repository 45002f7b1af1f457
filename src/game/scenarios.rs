//! The fixed scenario table: twelve quarters of financial decisions.
//!
//! Reference data — never mutated, never reordered, never randomized.
//! All amounts are in base currency units (see `currency` for display scaling).

/// One of the two choices offered by a scenario.
pub struct ScenarioOption {
    /// Display text for the choice button.
    pub label: &'static str,
    /// Signed amount (base units) applied to the balance.
    pub delta: i64,
    /// Feedback text shown after the choice is made.
    pub message: &'static str,
}

/// A single decision point in the year.
pub struct Scenario {
    /// 1-based ordinal, equals table position + 1.
    pub quarter: u8,
    pub title: &'static str,
    pub prompt: &'static str,
    pub options: [ScenarioOption; 2],
}

/// Number of scenarios in a full session.
pub const SCENARIO_COUNT: usize = SCENARIOS.len();

pub const SCENARIOS: [Scenario; 12] = [
    Scenario {
        quarter: 1,
        title: "Savings Plan",
        prompt: "You have some startup cash. Where do you put it?",
        options: [
            ScenarioOption { label: "Keep in Cash", delta: -50, message: "Inflation loss" },
            ScenarioOption { label: "High Yield Savings", delta: 50, message: "Interest gained" },
        ],
    },
    Scenario {
        quarter: 2,
        title: "Tech Breakdown",
        prompt: "Your laptop crashed.",
        options: [
            ScenarioOption { label: "Buy New Premium", delta: -800, message: "Expensive but durable" },
            ScenarioOption { label: "Repair Old", delta: -200, message: "Cheap fix" },
        ],
    },
    Scenario {
        quarter: 3,
        title: "Side Gig",
        prompt: "Opportunity to work weekends.",
        options: [
            ScenarioOption { label: "Take Job", delta: 500, message: "Hard work pays off" },
            ScenarioOption { label: "Relax", delta: -50, message: "Spent on entertainment" },
        ],
    },
    Scenario {
        quarter: 4,
        title: "Investment",
        prompt: "Market looks risky.",
        options: [
            ScenarioOption { label: "Invest Stocks", delta: -100, message: "Market crash! Loss" },
            ScenarioOption { label: "Stay Safe", delta: 0, message: "No gain, no loss" },
        ],
    },
    Scenario {
        quarter: 5,
        title: "Work Bonus",
        prompt: "You got a performance bonus!",
        options: [
            ScenarioOption { label: "Save it", delta: 300, message: "Banked the money" },
            ScenarioOption { label: "Party", delta: -100, message: "Spent bonus + extra" },
        ],
    },
    Scenario {
        quarter: 6,
        title: "Bad Loan",
        prompt: "Bank offers easy loan.",
        options: [
            ScenarioOption { label: "Take Loan", delta: -400, message: "Interest killed you later" },
            ScenarioOption { label: "Reject", delta: 0, message: "Smart choice" },
        ],
    },
    Scenario {
        quarter: 7,
        title: "Inflation",
        prompt: "Cost of living jump.",
        options: [
            ScenarioOption { label: "Strict Budget", delta: -50, message: "Controlled damage" },
            ScenarioOption { label: "Ignore", delta: -200, message: "Overspent" },
        ],
    },
    Scenario {
        quarter: 8,
        title: "Education",
        prompt: "Upskill course available.",
        options: [
            ScenarioOption { label: "Buy Course", delta: -200, message: "Knowledge is power" },
            ScenarioOption { label: "Skip", delta: 0, message: "Saved cash now" },
        ],
    },
    Scenario {
        quarter: 9,
        title: "Promotion",
        prompt: "Did you upskill in Q8?",
        options: [
            ScenarioOption { label: "Yes (I did)", delta: 500, message: "Promotion received!" },
            ScenarioOption { label: "No", delta: 0, message: "Stuck in same role" },
        ],
    },
    Scenario {
        quarter: 10,
        title: "Car Repair",
        prompt: "Brakes are failing.",
        options: [
            ScenarioOption { label: "Official Service", delta: -300, message: "Safe & Reliable" },
            ScenarioOption { label: "DIY Fix", delta: -50, message: "Risky" },
        ],
    },
    Scenario {
        quarter: 11,
        title: "Taxes",
        prompt: "End of financial year.",
        options: [
            ScenarioOption { label: "Hire Pro", delta: -100, message: "Found a refund! (+150 net)" },
            ScenarioOption { label: "Do Yourself", delta: -50, message: "Small fine for error" },
        ],
    },
    Scenario {
        quarter: 12,
        title: "Year End",
        prompt: "Celebrate surviving!",
        options: [
            ScenarioOption { label: "Big Trip", delta: -500, message: "Fun but broke" },
            ScenarioOption { label: "Staycation", delta: -50, message: "Relaxing and cheap" },
        ],
    },
];

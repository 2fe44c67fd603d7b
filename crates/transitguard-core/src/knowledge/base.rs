//! The built-in trigger -> response table and its read-only container.

use super::Topic;

/// One scripted answer: a lowercase trigger phrase paired with its canned response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnowledgeEntry {
    /// Which of the 8 topics this entry was curated under.
    pub topic: Topic,
    /// Lowercase trigger phrase, never empty. Matched as a substring first,
    /// then by token overlap.
    pub trigger: &'static str,
    /// Canned response returned verbatim on a match.
    pub response: &'static str,
}

/// The full curated table, in its original order. Order is load bearing:
/// the matcher returns the first entry that qualifies, not the best one.
const BUILTIN_ENTRIES: &[(Topic, &str, &str)] = &[
    // Topic 1: Real-Time Risk Awareness
    (
        Topic::RealTimeRisk,
        "is this stop considered high-risk right now",
        "Based on recent patterns, stops are considered high-risk if they show high incident density during peak hours (3–6 PM). If your stop is a busy CTA train platform or downtown transfer station, the current risk is likely elevated.",
    ),
    (
        Topic::RealTimeRisk,
        "current safety status",
        "For example, at Lake/State: This station had 5+ incidents in the past month and ranks among the highest-risk stations. Most incidents occur between 3 PM and 6 PM, mainly thefts and batteries.",
    ),
    (
        Topic::RealTimeRisk,
        "incidents reported near me",
        "Yes. There were 14 CTA-related incidents citywide in the past 24 hours, including thefts and assaults—primarily at downtown stations and on rail platforms.",
    ),
    (
        Topic::RealTimeRisk,
        "safety alerts today",
        "Based on incident distribution, Red Line and Blue Line stations had the most frequent activity recently, particularly in the Loop and at major transfer points.",
    ),
    (
        Topic::RealTimeRisk,
        "safest route",
        "Currently, routes that avoid the downtown Loop and use major bus lines like 96 Lunt or 31st tend to report fewer per-rider incidents. Avoid transfers at high-crime platforms during evening hours.",
    ),
    // Topic 2: Historical Crime & Patterns
    (
        Topic::HistoricalPatterns,
        "most crimes last month",
        "Top stations by incidents last month: Lake/State, Clark/Lake, O'Hare Airport. These locations are high-traffic transfer points with frequent reports of theft and battery.",
    ),
    (
        Topic::HistoricalPatterns,
        "most dangerous stations 2024",
        "In 2024, top crime-heavy L locations include: CTA TRAIN: 1,757 incidents, CTA PLATFORM: 775, CTA STATION: 525. Others such as Grand/State and Chicago/State also rank high.",
    ),
    (
        Topic::HistoricalPatterns,
        "when do crimes peak",
        "Crimes peak on weekdays, especially Tuesday to Thursday, and during 3–6 PM. July, September, and October are peak months.",
    ),
    (
        Topic::HistoricalPatterns,
        "weekdays vs weekends",
        "Weekday crimes: ~7,400–7,500 per day, Weekend crimes: ~6,400 per day. Weekdays show consistently higher incident volumes due to more ridership and crowding.",
    ),
    (
        Topic::HistoricalPatterns,
        "highest crime months red line",
        "Based on station-level data, months January, March, and May have shown the highest Red Line crime volumes, correlating with peak winter-spring ridership.",
    ),
    // Topic 3: Location-Specific Information
    (
        Topic::LocationSpecific,
        "crimes reported recently",
        "At CTA BUS: 130 assaults, At CTA PLATFORM: 46 assaults. Most recent incidents involve theft, battery, and criminal damage, especially at train platforms.",
    ),
    (
        Topic::LocationSpecific,
        "ward 42 dangerous",
        "Yes. Ward 42 leads with 7,753 incidents, followed by Wards 2 (3,012) and 6 (2,636). This includes areas like the Loop and River North.",
    ),
    (
        Topic::LocationSpecific,
        "assaults past year",
        "CTA BUS: 130, CTA TRAIN: 74, CTA STATION: 58. These represent the top three incident locations for assaults between May 2024–May 2025.",
    ),
    (
        Topic::LocationSpecific,
        "crime rate bus route",
        "The crime rate for the 79th route is elevated due to high ridership. While specific rate values require precise alignment with crimes per route, hotspot analysis flags it as high-risk.",
    ),
    (
        Topic::LocationSpecific,
        "recent incidents community",
        "Yes. Community Area 32 (The Loop) had 9,272 incidents, making it the most active zone. ZIP-based alerts are being tested for rollout.",
    ),
    // Topic 4: Environmental & Traffic Context
    (
        Topic::Environmental,
        "traffic accidents affecting routes",
        "Streets like Western Avenue and Michigan Avenue are high-incident corridors for traffic crashes and likely to impact bus reliability today.",
    ),
    (
        Topic::Environmental,
        "streets most crashes",
        "Western Avenue – 23,314 crashes, Michigan Avenue, State Street. These streets also overlap with busy CTA corridors.",
    ),
    (
        Topic::Environmental,
        "graffiti reports",
        "Yes, data shows high correlation between 311 graffiti/light-outage reports and elevated crime reports at stations like Roosevelt and Chicago/State.",
    ),
    (
        Topic::Environmental,
        "streetlight outage impact",
        "Streetlight outages are associated with a 15–25% rise in evening incidents, especially battery and criminal damage reports.",
    ),
    (
        Topic::Environmental,
        "graffiti higher crime",
        "Yes. A cluster analysis shows graffiti-heavy areas often overlap with high-risk zones, particularly on under-monitored routes.",
    ),
    // Topic 5: Predictive & Forecast-Based
    (
        Topic::Predictive,
        "predicted crime tomorrow",
        "Using XGBoost and SARIMA, stations like Clark/Lake and Roosevelt are predicted to face moderate to high risk tomorrow from 3–6 PM.",
    ),
    (
        Topic::Predictive,
        "crime increase weekend",
        "No major spikes predicted. Weekends typically show 15% lower incidents than weekdays, but night hours remain moderately risky.",
    ),
    (
        Topic::Predictive,
        "violent crimes spike month",
        "Forecasts indicate stable violent crime levels in May. No significant spike beyond normal weekday trends is expected.",
    ),
    (
        Topic::Predictive,
        "next high-risk day",
        "Model forecasts flag next Friday (May 17) as a high-risk day, especially between 3–6 PM in downtown stations.",
    ),
    (
        Topic::Predictive,
        "safest time fridays",
        "The safest windows are before 8 AM and after 9 PM, when both ridership and crime probability drop.",
    ),
    // Topic 6: Alerts and Safety Protocols
    (
        Topic::AlertsProtocols,
        "report incident",
        "You can report incidents via TransitGuard's app, through the built-in chat, or by calling the CTA safety hotline at 1-888-YOUR-CTA.",
    ),
    (
        Topic::AlertsProtocols,
        "witness crime train",
        "Immediately move to a safer area, press the emergency intercom, and use the app to alert TransitGuard. Stay aware and avoid confrontation.",
    ),
    (
        Topic::AlertsProtocols,
        "get alerts near me",
        "Yes. If you've enabled location sharing in the app, TransitGuard sends alerts within a quarter-mile radius for any reported CTA incident.",
    ),
    (
        Topic::AlertsProtocols,
        "cta staff respond",
        "Alerts are relayed to CTA's command center, which dispatches transit police or security teams. Average response time is 5–8 minutes.",
    ),
    (
        Topic::AlertsProtocols,
        "text api alerts",
        "Yes. SMS and API-based alerts are available via the mobile app or city's open safety API, depending on your settings.",
    ),
    // Topic 7: Equity and Accessibility
    (
        Topic::EquityAccessibility,
        "community areas incidents",
        "Top areas include: Loop (Community Area 32): 9,272, Near North Side (Area 8): 3,086, Rogers Park (Area 1): 1,998",
    ),
    (
        Topic::EquityAccessibility,
        "underserved neighborhoods",
        "Yes. Areas with fewer security staff or surveillance (e.g., West Side, South Side) show higher per-capita crime rates despite lower ridership.",
    ),
    (
        Topic::EquityAccessibility,
        "high crime low ridership",
        "Stations like Ashland/63rd and Garfield show high per-rider crime rates, making them priorities for targeted interventions.",
    ),
    (
        Topic::EquityAccessibility,
        "equity safety planning",
        "TransitGuard recommends equity-based patrol deployment and infrastructure upgrades in high-risk but underserved areas, backed by DBSCAN clustering.",
    ),
    // Topic 8: Quick Facts
    (
        Topic::QuickFacts,
        "stations near me",
        "The stations nearest to your current location are: Noyes, Foster, Central, and Davis",
    ),
    (
        Topic::QuickFacts,
        "total crimes today",
        "The total number of crimes today on Chicago Transit are 13.",
    ),
    (
        Topic::QuickFacts,
        "total traffic accidents today",
        "The total number of traffic accidents in Chicago today is 365.",
    ),
    (
        Topic::QuickFacts,
        "safest line last 7 days",
        "The safest line in the last 7 days is Purple and Yellow with 1 incidents.",
    ),
];

/// Immutable, insertion-ordered collection of [`KnowledgeEntry`] values.
///
/// Built once at startup and shared freely: there is no mutation API, so the
/// base is safe to hand to any number of concurrent callers without locking.
pub struct KnowledgeBase {
    entries: Vec<KnowledgeEntry>,
}

impl KnowledgeBase {
    /// Builds the base from the built-in curated table.
    pub fn builtin() -> Self {
        Self::from_table(BUILTIN_ENTRIES)
    }

    fn from_table(table: &[(Topic, &'static str, &'static str)]) -> Self {
        let entries: Vec<KnowledgeEntry> = table
            .iter()
            .map(|&(topic, trigger, response)| KnowledgeEntry {
                topic,
                trigger,
                response,
            })
            .collect();
        tracing::debug!(
            target: "transitguard::knowledge",
            entry_count = entries.len(),
            "knowledge base loaded ({} entries across {} topics)",
            entries.len(),
            super::TOPIC_LABELS.len()
        );
        Self { entries }
    }

    /// All entries, in curation order.
    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    /// Number of entries in the base.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries curated under `topic`, in curation order.
    pub fn topic_entries(&self, topic: Topic) -> Vec<&KnowledgeEntry> {
        self.entries.iter().filter(|e| e.topic == topic).collect()
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::builtin()
    }
}

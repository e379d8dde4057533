//! Topic rotation.
//!
//! One topic is due per calendar date. The rotation is a cheap deterministic
//! index into a fixed list, not a uniqueness guarantee: the same topic can
//! recur and neighbouring dates can collide or skip entries.
use chrono::{Datelike, NaiveDate};

/// Candidate topics, kept ASCII-safe (umlauts written out).
pub const TOPICS: [&str; 15] = [
    "Shared Hosting vs. VPS vs. Cloud - welcher Tarif passt fuer wen?",
    "WordPress Backups automatisieren in 10 Minuten",
    "CDN erklaert: Bilder und Assets schnell ausliefern",
    "E-Mail-Hosting: Mailserver vs. Anbieter - Vor- und Nachteile",
    "Website-Umzug: Zero-Downtime-Migration Schritt fuer Schritt",
    "Performance-Basics: Caching verstehen",
    "SSL/TLS konfigurieren - HSTS, TLS 1.3 und mehr",
    "Domains clever waehlen: SEO und Endungen",
    "VPN: Nutzen, Grenzen und worauf achten",
    "Monitoring & Uptime: Tools fuer kleine Sites",
    "Kostenoptimierung: Von 50 EUR auf 15 EUR pro Monat",
    "E-Mail-Zustellbarkeit: SPF, DKIM, DMARC",
    "Static vs. Headless CMS",
    "Failover & Redundanz: Grosse Wirkung",
    "Datenbanken: MySQL vs. PostgreSQL",
];

/// The topic due on `date`: `(iso_week + day_of_month) % len`.
pub fn due_topic(date: NaiveDate) -> &'static str {
    let week = date.iso_week().week() as usize;
    let day = date.day() as usize;
    TOPICS[(week + day) % TOPICS.len()]
}

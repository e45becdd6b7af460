//! Plain-text rendering of a [`PokemonCard`].

use std::fmt::{self, Display, Formatter};

use crate::locale::Labels;
use crate::models::{EncounterInfo, MoveInfo, PokemonCard};

/// Steps per egg cycle.
const STEPS_PER_CYCLE: u32 = 257;

/// Highest base value per stat across all species; bars are scaled to these.
const STAT_MAXIMA: [(&str, u32); 6] = [
    ("hp", 255),
    ("attack", 190),
    ("defense", 230),
    ("special-attack", 194),
    ("special-defense", 250),
    ("speed", 200),
];

const BAR_WIDTH: u32 = 20;

/// Renders `card` as a multi-section text card.
pub fn render_card(card: &PokemonCard, labels: &Labels) -> String {
    CardView { card, labels }.to_string()
}

/// Borrowing view that formats a card with one set of labels.
pub struct CardView<'a> {
    pub card: &'a PokemonCard,
    pub labels: &'a Labels,
}

impl Display for CardView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.header(f)?;
        self.stats(f)?;
        self.abilities(f)?;
        self.details(f)?;
        self.evolution(f)?;
        self.matchups(f)?;
        self.moves(f)?;
        self.encounters(f)
    }
}

impl CardView<'_> {
    fn header(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let card = self.card;
        writeln!(f, "#{:03} {} ({})", card.id, card.display_name(), card.name)?;

        let types: Vec<&str> = card
            .types
            .iter()
            .map(|t| self.labels.type_name(t))
            .collect();
        writeln!(f, "{}", types.join(" / "))?;

        if let Some(description) = &card.description {
            writeln!(f, "{}", description)?;
        }
        Ok(())
    }

    fn stats(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let h = &self.labels.headings;
        writeln!(f)?;
        writeln!(f, "[{}] {}: {}", h.stats, h.total, self.card.base_stat_total)?;
        for (slug, label) in &self.labels.stat_names {
            let value = self.card.stat(slug).unwrap_or(0);
            writeln!(f, "  {} {} {}", label, value, stat_bar(slug, value))?;
        }
        Ok(())
    }

    fn abilities(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let h = &self.labels.headings;
        writeln!(f)?;
        writeln!(f, "[{}]", h.abilities)?;
        if self.card.abilities.is_empty() {
            return writeln!(f, "  {}", self.labels.placeholders.unknown);
        }
        for ability in &self.card.abilities {
            if ability.is_hidden {
                writeln!(f, "  {} ({}): {}", ability.name, h.hidden_ability, ability.description)?;
            } else {
                writeln!(f, "  {}: {}", ability.name, ability.description)?;
            }
        }
        Ok(())
    }

    fn details(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let h = &self.labels.headings;
        let unknown = &self.labels.placeholders.unknown;
        let card = self.card;

        writeln!(f)?;
        writeln!(f, "{}: {} m", h.height, tenths(card.height))?;
        writeln!(f, "{}: {} kg", h.weight, tenths(card.weight))?;
        match card.gender_rate {
            Some(rate) => writeln!(f, "{}: {}", h.gender, gender_ratio(rate, self.labels))?,
            None => writeln!(f, "{}: {}", h.gender, unknown)?,
        }
        match card.capture_rate {
            Some(rate) => writeln!(f, "{}: {}", h.capture_rate, rate)?,
            None => writeln!(f, "{}: {}", h.capture_rate, unknown)?,
        }
        match card.hatch_counter {
            Some(cycles) => writeln!(f, "{}: {} {}", h.hatch_steps, cycles * STEPS_PER_CYCLE, h.steps),
            None => writeln!(f, "{}: {}", h.hatch_steps, unknown),
        }
    }

    fn evolution(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "[{}]", self.labels.headings.evolution)?;

        let nodes = match &self.card.evolution {
            Some(nodes) if nodes.len() > 1 => nodes,
            _ => return writeln!(f, "  {}", self.labels.placeholders.no_evolution),
        };

        let mut line = nodes[0].localized_name.clone();
        for node in &nodes[1..] {
            let condition = node
                .condition
                .as_deref()
                .unwrap_or(&self.labels.evolution.generic);
            line.push_str(&format!(" ➜ ({}) {}", condition, node.localized_name));
        }
        writeln!(f, "  {}", line)
    }

    fn matchups(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "[{}]", self.labels.headings.matchups)?;
        if self.card.type_effectiveness.is_empty() {
            return writeln!(f, "  {}", self.labels.placeholders.unknown);
        }

        let entries: Vec<String> = self
            .card
            .type_effectiveness
            .iter()
            .map(|m| format!("{} x{}", self.labels.type_name(m.tag.slug()), m.multiplier))
            .collect();
        writeln!(f, "  {}", entries.join(", "))
    }

    fn moves(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let h = &self.labels.headings;
        writeln!(f)?;
        writeln!(f, "[{}]", h.level_up_moves)?;
        self.move_table(f, &self.card.level_up_moves)?;
        writeln!(f)?;
        writeln!(f, "[{}]", h.machine_moves)?;
        self.move_table(f, &self.card.machine_moves)
    }

    fn move_table(&self, f: &mut Formatter<'_>, moves: &[MoveInfo]) -> fmt::Result {
        if moves.is_empty() {
            return writeln!(f, "  {}", self.labels.placeholders.no_moves);
        }

        let unknown = self.labels.placeholders.unknown.as_str();
        writeln!(f, "  {}", self.labels.headings.move_columns.join(" | "))?;
        for m in moves {
            let level = m
                .level
                .filter(|level| *level > 0)
                .map_or_else(|| unknown.to_string(), |level| level.to_string());
            let kind = m.kind.as_deref().map_or(unknown, |k| self.labels.type_name(k));
            let category = m.category_label.as_deref().unwrap_or(unknown);
            let power = m.power.map_or_else(|| unknown.to_string(), |p| p.to_string());
            let accuracy = m
                .accuracy
                .map_or_else(|| unknown.to_string(), |a| format!("{}%", a));

            writeln!(
                f,
                "  {} | {} | {} | {} | {} | {}",
                level, m.name, kind, category, power, accuracy
            )?;
        }
        Ok(())
    }

    fn encounters(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let h = &self.labels.headings;
        writeln!(f)?;
        writeln!(f, "[{}]", h.encounters)?;
        if self.card.encounters.is_empty() {
            return writeln!(f, "  {}", self.labels.placeholders.no_encounters);
        }

        writeln!(f, "  {}", h.encounter_columns.join(" | "))?;
        for encounter in &self.card.encounters {
            writeln!(f, "  {}", self.encounter_row(encounter))?;
        }
        Ok(())
    }

    fn encounter_row(&self, encounter: &EncounterInfo) -> String {
        let unknown = &self.labels.placeholders.unknown;
        match encounter.primary() {
            Some(version) => {
                let method = version
                    .methods
                    .first()
                    .map_or(self.labels.unknown_method.as_str(), |m| m.method.as_str());
                format!(
                    "{} | {} | {} | {}%",
                    version.version, encounter.location, method, version.max_chance
                )
            }
            None => format!(
                "{} | {} | {} | {}",
                unknown, encounter.location, self.labels.unknown_method, unknown
            ),
        }
    }
}

/// `[████░░…]` filled in proportion to the stat's maximum.
fn stat_bar(slug: &str, value: u32) -> String {
    let max = STAT_MAXIMA
        .iter()
        .find(|(name, _)| *name == slug)
        .map_or(255, |(_, max)| *max);
    let filled = ((f64::from(value.min(max)) / f64::from(max)) * f64::from(BAR_WIDTH)).round() as u32;
    let mut bar = String::with_capacity((BAR_WIDTH as usize + 2) * 3);
    bar.push('[');
    (0..BAR_WIDTH).for_each(|i| bar.push(if i < filled { '█' } else { '░' }));
    bar.push(']');
    bar
}

/// `69` → `6.9`, `100` → `10`.
fn tenths(value: u32) -> String {
    (f64::from(value) / 10.0).to_string()
}

/// Male/female split from a rate in eighths; -1 is genderless.
fn gender_ratio(rate: i32, labels: &Labels) -> String {
    if rate < 0 {
        return labels.placeholders.genderless.clone();
    }
    let female = f64::from(rate) / 8.0 * 100.0;
    let male = 100.0 - female;
    format!("♂ {}% / ♀ {}%", male, female)
}

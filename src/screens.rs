//! Per-screen reveal builders.
//!
//! Each builder turns a statistic bundle into the ordered reveal sequence
//! for its screen: text blocks, emoji callouts, and (for the distribution
//! screens) a supplementary chart keyed off the same bundle. Pacing gaps
//! are fixed milliseconds; the sequence builder guarantees strictly
//! increasing offsets.
//!
//! User-facing strings are fixed-locale Spanish, matching the dataset.
//! Statistics stay data-only; nothing here computes, it only phrases.

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::reveal::{ChartSpec, RevealContent, RevealItem, RevealSequence};
use crate::types::stats::MealMoment;
use crate::types::{Month, ScreenStats, TimeBucket};

/// Context a builder may need beyond its statistic bundle.
#[derive(Debug, Clone, Default)]
pub struct ScreenContext {
    /// Selected user, when one is set.
    pub user: Option<String>,
    /// Distinct users in first-seen order (selection screen only).
    pub users: Vec<String>,
}

/// Placeholder shown where a favorite could not be determined.
const PLACEHOLDER: &str = "—";

fn favorite_or_placeholder(label: Option<String>) -> String {
    label.unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// `5 de enero, 08:15` from a timestamp.
fn format_moment(dt: &NaiveDateTime) -> String {
    let month = Month::from_number(dt.month())
        .map(|m| m.label().to_lowercase())
        .unwrap_or_default();
    format!(
        "{} de {}, {:02}:{:02}",
        dt.day(),
        month,
        dt.hour(),
        dt.minute()
    )
}

/// Selection screen: title block, then one button per distinct user.
pub fn build_selection(_stats: &ScreenStats, ctx: &ScreenContext) -> Vec<RevealItem> {
    let mut seq = RevealSequence::new();
    seq.push(
        RevealContent::Title("🍽️ Tu Wrapped de Comidas 2026".into()),
        800,
    );
    seq.push(
        RevealContent::Text("Descubre tus hábitos alimenticios del año".into()),
        800,
    );
    seq.push(RevealContent::Emoji("🤤".into()), 1000);
    seq.push(
        RevealContent::Text("¿Quién quiere ver su wrapped?".into()),
        1000,
    );
    for user in &ctx.users {
        seq.push(RevealContent::UserButton(user.clone()), 300);
    }
    seq.into_items()
}

/// Welcome screen: personal greeting.
pub fn build_welcome(_stats: &ScreenStats, ctx: &ScreenContext) -> Vec<RevealItem> {
    let user = ctx.user.as_deref().unwrap_or(PLACEHOLDER);
    let mut seq = RevealSequence::new();
    seq.push(RevealContent::Title(format!("¡Hola {user}! 👋")), 1500);
    seq.push(
        RevealContent::Text("Vamos a analizar tus hábitos alimenticios de 2026 🍴".into()),
        1500,
    );
    seq.push(RevealContent::Emoji("🤓".into()), 1000);
    seq.push(
        RevealContent::Text("¿Listo para descubrir cuánto has comido?".into()),
        1500,
    );
    seq.into_items()
}

fn totals_comment(avg: f64) -> (&'static str, &'static str) {
    if avg >= 5.0 {
        ("¡Comes más que un deportista de élite! 🏋️", "💪")
    } else if avg >= 4.0 {
        ("Ritmo de comidas perfecto, ni una se te escapa 😋", "😎")
    } else if avg >= 3.0 {
        ("Las 3 comidas principales al día, ¡bien hecho! 👍", "👌")
    } else if avg >= 2.0 {
        ("Dos comidas al día, ¿te saltas alguna? 🤔", "🤨")
    } else if avg >= 1.0 {
        ("Una comida al día... ¿estás a dieta o qué? 🐦", "😲")
    } else {
        ("¿Eres un ser fotosintético? 🌱", "🌞")
    }
}

/// Totals screen: meal count, day count, per-day average, tiered comment.
pub fn build_totals(stats: &ScreenStats, _ctx: &ScreenContext) -> Vec<RevealItem> {
    let ScreenStats::Totals(stats) = stats else {
        return Vec::new();
    };
    let mut seq = RevealSequence::new();
    seq.push(RevealContent::Title("🍕 Total de Comidas".into()), 1200);
    seq.push(
        RevealContent::Text(format!(
            "Este año tuviste {} comidas diferentes",
            stats.total_meals
        )),
        1500,
    );
    seq.push(
        RevealContent::Text(format!(
            "En {} días diferentes registrados",
            stats.total_days
        )),
        1500,
    );
    seq.push(
        RevealContent::Text(format!("Promedio: {:.1} comidas por día", stats.avg_per_day)),
        1500,
    );
    let (comment, emoji) = totals_comment(stats.avg_per_day);
    seq.push(RevealContent::Text(comment.into()), 1500);
    seq.push(RevealContent::Emoji(emoji.into()), 1000);
    seq.into_items()
}

fn first_meal_comment(hour: u32) -> &'static str {
    if hour < 6 {
        "¡Qué madrugador para empezar el año! 🌅"
    } else if hour < 12 {
        "Buen desayuno para arrancar el año ☕"
    } else if hour < 18 {
        "Comiendo temprano, buen hábito 🕛"
    } else {
        "Empezando el año con cena 🌃"
    }
}

fn last_meal_comment(hour: u32) -> &'static str {
    if hour < 6 {
        "Terminando el año de madrugada, ¡épico! 🌙"
    } else if hour < 12 {
        "Cerrando el año con buen desayuno 🍳"
    } else if hour < 18 {
        "Año que termina, comida que alimenta 🍽️"
    } else {
        "Cena de fin de año perfecta 🎉"
    }
}

fn push_moment(seq: &mut RevealSequence, intro: &str, moment: &MealMoment, comment: &str) {
    seq.push(RevealContent::Text(intro.into()), 1500);
    seq.push(RevealContent::Emphasis(moment.dish.clone()), 1500);
    seq.push(
        RevealContent::Text(format!("El {}", format_moment(&moment.date_time))),
        1500,
    );
    seq.push(RevealContent::Text(comment.into()), 1500);
}

fn mentions_coffee(dish: &str) -> bool {
    let lower = dish.to_lowercase();
    lower.contains("cafe") || lower.contains("café")
}

/// FirstLast screen: first meal block, last meal block, evolution note.
pub fn build_first_last(stats: &ScreenStats, _ctx: &ScreenContext) -> Vec<RevealItem> {
    let ScreenStats::FirstLast(stats) = stats else {
        return Vec::new();
    };
    let mut seq = RevealSequence::new();
    seq.push(RevealContent::Title("🎬 Inicio y Final".into()), 1200);

    if let Some(first) = &stats.first {
        push_moment(
            &mut seq,
            "Tu primera comida registrada del año:",
            first,
            first_meal_comment(first.hour),
        );
    }
    if let Some(last) = &stats.last {
        seq.push(RevealContent::Separator, 500);
        push_moment(
            &mut seq,
            "Tu última comida registrada del año:",
            last,
            last_meal_comment(last.hour),
        );
        if let Some(first) = &stats.first {
            if stats.same_dish {
                seq.push(
                    RevealContent::Text(
                        "Eres fiel a tus gustos, mismo plato para empezar y terminar 💖".into(),
                    ),
                    1500,
                );
            } else {
                seq.push(RevealContent::Separator, 500);
                seq.push(
                    RevealContent::Text(format!("De {} a {}", first.dish, last.dish)),
                    1500,
                );
                let note = if mentions_coffee(&first.dish) && mentions_coffee(&last.dish) {
                    "¡Te gusta tanto el café que empezaste y terminaste con él! ☕➡️☕"
                } else {
                    "¡Vaya evolución gastronómica en un año! 🔄"
                };
                seq.push(RevealContent::Text(note.into()), 1500);
            }
        }
    }

    seq.push(RevealContent::Emoji("📅".into()), 1500);
    seq.into_items()
}

/// FavoriteDay screen: favorite weekday, averages, comment, weekday chart.
pub fn build_favorite_day(stats: &ScreenStats, _ctx: &ScreenContext) -> Vec<RevealItem> {
    let ScreenStats::Weekday(stats) = stats else {
        return Vec::new();
    };
    let mut seq = RevealSequence::new();
    seq.push(RevealContent::Title("📅 Día Favorito".into()), 1200);
    let label = favorite_or_placeholder(stats.favorite.map(|d| d.label().to_string()));
    seq.push(
        RevealContent::Text(format!("Tu día favorito para comer es el {label}")),
        1500,
    );
    seq.push(
        RevealContent::Text(format!(
            "Con {} comidas completas ese día",
            stats.favorite_count
        )),
        1500,
    );
    seq.push(
        RevealContent::Text(format!(
            "Promedio: {:.1} comidas por día de semana",
            stats.weekly_average
        )),
        1500,
    );

    if let Some(day) = stats.favorite {
        let mut comment = if day.is_weekend() {
            "¡Los fines de semana se come de rechupete! 🎉".to_string()
        } else {
            "Hasta entre semana te das tus banquetes 💼".to_string()
        };
        if stats.lead_over_average > 2.0 {
            comment.push_str(" ¡Ese día comes el doble! 🍽️🍽️");
        }
        seq.push(RevealContent::Text(comment), 1500);
    }

    seq.push(RevealContent::Chart(ChartSpec::Weekday(stats.clone())), 500);
    if f64::from(stats.favorite_count) > stats.weekly_average * 1.5 && stats.favorite.is_some() {
        seq.push(
            RevealContent::Note(format!(
                "↑ El {label} tiene {:.1} comidas más que el promedio",
                stats.lead_over_average
            )),
            500,
        );
    }
    seq.into_items()
}

fn dish_emoji(dish: &str) -> &'static str {
    let lower = dish.to_lowercase();
    if lower.contains("cafe") || lower.contains("café") {
        "☕"
    } else if lower.contains("pizza") {
        "🍕"
    } else if lower.contains("hamburguesa") {
        "🍔"
    } else if lower.contains("ensalada") {
        "🥗"
    } else {
        "🍽️"
    }
}

/// TopDishes screen: #1 dish spotlight, ranking chart, runner-up note.
pub fn build_top_dishes(stats: &ScreenStats, _ctx: &ScreenContext) -> Vec<RevealItem> {
    let ScreenStats::TopDishes(stats) = stats else {
        return Vec::new();
    };
    let mut seq = RevealSequence::new();
    seq.push(RevealContent::Title("⭐ Top 5 Platos".into()), 1200);
    seq.push(RevealContent::Text("Tu #1 del año:".into()), 1500);

    let top = stats.ranking.first();
    let dish = top.map(|e| e.dish.clone()).unwrap_or_else(|| PLACEHOLDER.into());
    let (count, pct) = top.map(|e| (e.count, e.percent)).unwrap_or((0, 0));
    seq.push(RevealContent::Emphasis(dish.clone()), 1500);
    seq.push(
        RevealContent::Text(format!(
            "Lo comiste {count} veces ({pct}% de todos tus platos)"
        )),
        1500,
    );
    seq.push(RevealContent::Emoji(dish_emoji(&dish).into()), 1000);

    if !stats.ranking.is_empty() {
        seq.push(RevealContent::Chart(ChartSpec::Dishes(stats.clone())), 500);
        if stats.lead_over_runner_up > 5 {
            seq.push(
                RevealContent::Note(format!(
                    "{} le saca {} platos de ventaja al #2",
                    dish, stats.lead_over_runner_up
                )),
                500,
            );
        }
    }
    seq.into_items()
}

fn tally_comment(name: &str, total: u32) -> Option<&'static str> {
    let comment = match name {
        "cafe" => {
            if total > 50 {
                "¡Eres un auténtico cafeinómano! ⚡"
            } else if total > 20 {
                "Te gusta arrancar el día con energía ☀️"
            } else {
                "Un cafelito de vez en cuando no hace daño 😌"
            }
        }
        "yogur" => {
            if total > 30 {
                "¡Tu flora intestinal te adora! 🦠💖"
            } else if total > 10 {
                "Muy saludable, sigue así 🍃"
            } else {
                "Un toque de calcio en tu dieta 💪"
            }
        }
        "burger_king" => {
            if total > 20 {
                "¡Deberían darte acciones de la empresa! 👑"
            } else if total > 10 {
                "Eres cliente VIP sin saberlo 😎"
            } else {
                "Un Whopper de vez en cuando no hace daño 🍔"
            }
        }
        _ => return None,
    };
    Some(comment)
}

fn tally_label(name: &str) -> String {
    match name {
        "cafe" => "☕ Café".to_string(),
        "yogur" => "🥛 Yogur".to_string(),
        "burger_king" => "🍔 Burger King".to_string(),
        other => other.replace('_', " "),
    }
}

/// Tallies screen: one block per non-zero counter, comparison chart.
pub fn build_tallies(stats: &ScreenStats, _ctx: &ScreenContext) -> Vec<RevealItem> {
    let ScreenStats::Tallies(stats) = stats else {
        return Vec::new();
    };
    let mut seq = RevealSequence::new();
    seq.push(RevealContent::Title("📊 Tus Favoritos".into()), 1200);
    seq.push(RevealContent::Text("Veamos qué te gusta más...".into()), 1500);

    for (position, tally) in stats.totals.iter().enumerate() {
        if position > 0 {
            seq.push(RevealContent::Separator, 500);
        }
        seq.push(
            RevealContent::Text(format!(
                "{}: {} veces",
                tally_label(&tally.name),
                tally.total
            )),
            1200,
        );
        seq.push(
            RevealContent::Text(format!(
                "El {}% de tus comidas incluyeron {}",
                tally.percent, tally.name
            )),
            1500,
        );
        if let Some(comment) = tally_comment(&tally.name, tally.total) {
            seq.push(RevealContent::Text(comment.into()), 1500);
        }
    }

    if stats.totals.is_empty() {
        seq.push(
            RevealContent::Text("No registraste ninguno de tus favoritos este año".into()),
            1500,
        );
        seq.push(
            RevealContent::Text("¡El próximo año apunta más cosas! 📝".into()),
            1500,
        );
    } else {
        seq.push(RevealContent::Chart(ChartSpec::Tallies(stats.clone())), 1500);
    }

    seq.push(RevealContent::Emoji("🏆".into()), 1000);
    seq.into_items()
}

fn bucket_comment(bucket: TimeBucket) -> (&'static str, &'static str) {
    match bucket {
        TimeBucket::SmallHours => ("¡Eres un trasnochador de la comida! 🌙", "🦉"),
        TimeBucket::Morning => ("Empiezas el día con energía ☀️", "🌅"),
        TimeBucket::Afternoon => ("La comida principal es sagrada 🍽️", "⏰"),
        TimeBucket::Evening => ("Las cenas son tus momentos especiales 🌃", "🌙"),
    }
}

/// TimeOfDay screen: favorite bucket, spread comment, distribution chart.
pub fn build_time_of_day(stats: &ScreenStats, _ctx: &ScreenContext) -> Vec<RevealItem> {
    let ScreenStats::TimeOfDay(stats) = stats else {
        return Vec::new();
    };
    let mut seq = RevealSequence::new();
    seq.push(RevealContent::Title("🕐 Horario Preferido".into()), 1200);
    seq.push(
        RevealContent::Text("Tu franja horaria favorita es:".into()),
        1500,
    );
    let label = favorite_or_placeholder(stats.favorite.map(|b| b.label().to_string()));
    seq.push(RevealContent::Emphasis(label), 1500);
    seq.push(
        RevealContent::Text(format!("Con {} comidas en ese horario", stats.favorite_count)),
        1500,
    );
    seq.push(
        RevealContent::Text(format!("Eso es el {}% de todas tus comidas", stats.percent)),
        1500,
    );

    if let Some(bucket) = stats.favorite {
        let (base, emoji) = bucket_comment(bucket);
        let mut comment = base.to_string();
        if stats.percent > 50 {
            comment.push_str(" ¡Más de la mitad de tus comidas son a esa hora!");
        } else if stats.percent < 20 {
            comment.push_str(" Repartes bien tus comidas a lo largo del día.");
        }
        seq.push(RevealContent::Text(comment), 1500);
        seq.push(RevealContent::Emoji(emoji.into()), 1000);
    }

    if stats.total > 0 {
        seq.push(RevealContent::Chart(ChartSpec::TimeOfDay(stats.clone())), 500);
    }
    seq.into_items()
}

fn month_comment(month: Month) -> (&'static str, &'static str) {
    match month {
        Month::November | Month::December => ("¡Las fiestas navideñas abren el apetito! 🎄", "🎅"),
        Month::July | Month::August => ("El verano y las vacaciones se notan 🏖️", "🌴"),
        Month::January | Month::February => ("Empiezas el año con buen ritmo 🎆", "✨"),
        _ => ("Buena temporada de comida 🍴", "📅"),
    }
}

/// ActiveMonth screen: most active month, annual average, monthly chart.
pub fn build_active_month(stats: &ScreenStats, _ctx: &ScreenContext) -> Vec<RevealItem> {
    let ScreenStats::Monthly(stats) = stats else {
        return Vec::new();
    };
    let mut seq = RevealSequence::new();
    seq.push(RevealContent::Title("📈 Mes Más Activo".into()), 1200);
    let label = favorite_or_placeholder(stats.favorite.map(|m| m.label().to_string()));
    seq.push(
        RevealContent::Text(format!("Tu mes más hambriento fue {label}")),
        1500,
    );
    seq.push(
        RevealContent::Text(format!("Con {} comidas registradas", stats.favorite_count)),
        1500,
    );
    seq.push(
        RevealContent::Text(format!(
            "Promedio anual: {:.1} comidas por mes",
            stats.monthly_average
        )),
        1500,
    );

    if let Some(month) = stats.favorite {
        let (base, emoji) = month_comment(month);
        let mut comment = base.to_string();
        if stats.lead_over_average > 10.0 {
            comment.push_str(" ¡Vaya festín mensual! 🍽️");
        } else if stats.lead_over_average < 5.0 {
            comment.push_str(" Bastante estable durante el año.");
        }
        seq.push(RevealContent::Text(comment), 1500);
        seq.push(RevealContent::Emoji(emoji.into()), 1000);
    }

    if stats.total > 0 {
        seq.push(RevealContent::Chart(ChartSpec::Monthly(stats.clone())), 500);
        if stats.lead_over_average > 5.0 {
            seq.push(
                RevealContent::Note(format!(
                    "En {label} comiste {:.1} veces más que el promedio mensual",
                    stats.lead_over_average
                )),
                500,
            );
        }
    }
    seq.into_items()
}

/// Farewell screen: congratulations and the restart action.
pub fn build_farewell(_stats: &ScreenStats, ctx: &ScreenContext) -> Vec<RevealItem> {
    let user = ctx.user.as_deref().unwrap_or(PLACEHOLDER);
    let mut seq = RevealSequence::new();
    seq.push(RevealContent::Title("🎉 ¡Felicidades!".into()), 1500);
    seq.push(
        RevealContent::Text(format!(
            "{user}, has completado tu Wrapped de Comidas 2026"
        )),
        1500,
    );
    seq.push(RevealContent::Emoji("🏆".into()), 1500);
    seq.push(
        RevealContent::Text("Esperamos que te haya gustado este repaso gastronómico".into()),
        1500,
    );
    seq.push(
        RevealContent::Text("¡Nos vemos el próximo año con más datos deliciosos! 🍕".into()),
        1500,
    );
    seq.push(RevealContent::RestartButton, 1000);
    seq.into_items()
}

use std::fmt;

/// Sound category, decided purely by file name prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TuneKind {
    Poweron,
    Poweroff,
    Hum,
    Swing,
    Clash,
}

impl TuneKind {
    pub const ALL: [TuneKind; 5] = [
        TuneKind::Poweron,
        TuneKind::Poweroff,
        TuneKind::Hum,
        TuneKind::Swing,
        TuneKind::Clash,
    ];

    /// Case-sensitive file name prefix
    pub fn prefix(self) -> &'static str {
        match self {
            TuneKind::Poweron => "poweron",
            TuneKind::Poweroff => "poweroff",
            TuneKind::Hum => "hum",
            TuneKind::Swing => "swing",
            TuneKind::Clash => "clash",
        }
    }

    /// Upper-case name used in generated identifiers
    pub fn symbol(self) -> &'static str {
        match self {
            TuneKind::Poweron => "POWERON",
            TuneKind::Poweroff => "POWEROFF",
            TuneKind::Hum => "HUM",
            TuneKind::Swing => "SWING",
            TuneKind::Clash => "CLASH",
        }
    }
}

/// The open-ended categories that get count constants and lookup tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListKind {
    Swing,
    Clash,
}

impl ListKind {
    pub fn kind(self) -> TuneKind {
        match self {
            ListKind::Swing => TuneKind::Swing,
            ListKind::Clash => TuneKind::Clash,
        }
    }

    pub fn id(self, index: usize) -> TuneId {
        match self {
            ListKind::Swing => TuneId::Swing(index),
            ListKind::Clash => TuneId::Clash(index),
        }
    }
}

/// A planned output record: fixed tunes, or a swing/clash tune with its index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TuneId {
    Poweron,
    Poweroff,
    Hum,
    Swing(usize),
    Clash(usize),
}

impl TuneId {
    pub fn kind(self) -> TuneKind {
        match self {
            TuneId::Poweron => TuneKind::Poweron,
            TuneId::Poweroff => TuneKind::Poweroff,
            TuneId::Hum => TuneKind::Hum,
            TuneId::Swing(_) => TuneKind::Swing,
            TuneId::Clash(_) => TuneKind::Clash,
        }
    }
}

/// `POWERON`, `HUM`, `SWING0`, `CLASH3`, ...
impl fmt::Display for TuneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            TuneId::Swing(i) | TuneId::Clash(i) => write!(f, "{}{}", self.kind().symbol(), i),
            _ => f.write_str(self.kind().symbol()),
        }
    }
}

pub fn classify(file_name: &str) -> Option<TuneKind> {
    TuneKind::ALL
        .into_iter()
        .find(|kind| file_name.starts_with(kind.prefix()))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlannedTune {
    pub id: TuneId,
    pub file_name: String,
}

/// Which file feeds which record, in emission order.
#[derive(Clone, Debug, Default)]
pub struct TunePlan {
    pub poweron: Option<String>,
    pub poweroff: Option<String>,
    pub hum: Option<String>,
    pub swing: Vec<String>,
    pub clash: Vec<String>,
    /// Extra fixed-category candidates that lost to an earlier file
    pub ignored: Vec<String>,
    pub unrecognized: Vec<String>,
}

impl TunePlan {
    /// Poweron, poweroff, hum, swings by index, clashes by index.
    pub fn tunes(&self) -> Vec<PlannedTune> {
        let fixed = [
            (TuneId::Poweron, &self.poweron),
            (TuneId::Poweroff, &self.poweroff),
            (TuneId::Hum, &self.hum),
        ];
        let fixed = fixed.into_iter().filter_map(|(id, name)| {
            name.as_ref().map(|n| PlannedTune {
                id,
                file_name: n.clone(),
            })
        });
        let swing = self.swing.iter().enumerate().map(|(i, n)| PlannedTune {
            id: TuneId::Swing(i),
            file_name: n.clone(),
        });
        let clash = self.clash.iter().enumerate().map(|(i, n)| PlannedTune {
            id: TuneId::Clash(i),
            file_name: n.clone(),
        });
        fixed.chain(swing).chain(clash).collect()
    }
}

/// Assign files to categories, keeping the given order.
///
/// The first file of each fixed category wins; swing and clash files are
/// indexed 0..N in the order they appear.
pub fn plan_tunes<S: AsRef<str>>(names: &[S]) -> TunePlan {
    let mut plan = TunePlan::default();

    for name in names {
        let name = name.as_ref();
        let slot = match classify(name) {
            Some(TuneKind::Poweron) => &mut plan.poweron,
            Some(TuneKind::Poweroff) => &mut plan.poweroff,
            Some(TuneKind::Hum) => &mut plan.hum,
            Some(TuneKind::Swing) => {
                plan.swing.push(name.to_string());
                continue;
            }
            Some(TuneKind::Clash) => {
                plan.clash.push(name.to_string());
                continue;
            }
            None => {
                plan.unrecognized.push(name.to_string());
                continue;
            }
        };

        if let Some(winner) = slot.as_deref() {
            log::warn!("Ignoring {}: {} already supplies that sound", name, winner);
            plan.ignored.push(name.to_string());
        } else {
            *slot = Some(name.to_string());
        }
    }

    plan
}

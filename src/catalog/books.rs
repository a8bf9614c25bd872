/// Icon attached to a book metadata row.
///
/// Typed replacement for the icon references carried alongside each
/// detail row; the render layer maps these to glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailIcon {
    MapPin,
    Ghost,
    Shield,
    Timer,
    Wand,
}

/// One labeled metadata row on a book detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookDetailRow {
    pub icon: DetailIcon,
    pub label: &'static str,
    pub value: &'static str,
}

/// An immutable book record.
///
/// `gradient` is presentational (the original cover gradient classes),
/// kept so the render layer can pick an accent color per book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookRecord {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub status: &'static str,
    pub tags: &'static [&'static str],
    pub blurb: &'static str,
    pub details: &'static [BookDetailRow],
    pub author: &'static str,
    pub gradient: &'static str,
}

const AUTHOR: &str = "Torben Halvorsen Rygg";

static BOOKS: [BookRecord; 3] = [
    BookRecord {
        id: "pentangelen",
        title: "Pentangelen",
        subtitle: "Okkult humor og helvete ved Vestfoldkysten",
        status: "Ferdig manus (klar for forlag)",
        tags: &["okkult", "horror", "humor", "Vestfold"],
        blurb: "Bendik har en plan for livet: å bli okkult eventyrer. Problemet er at det ikke \
                finnes en skole for sånt, og det mest mystiske som skjer i Tønsberg er at det er \
                noen som har agurkmiks på bensinstasjonspølsa. Men alt endrer seg den dagen han og \
                kompisen Robban prøver å hjelpe en eksentrisk magiker som kan ha satt fyr på en \
                leilighet. Plutselig er de Norges mest ukvalifiserte men dyktige etterforskere, \
                jaktet av en udødelig nazisekt og skapninger som har krøpet ut av lokalhistorien. \
                Pentangelen er en mørk, blodig og hysterisk morsom reise inn i Vestfolds hemmelige \
                underverden, der den største trusselen kanskje ikke er glemte guder eller \
                zombie-nazister, men dine egne dårlige ideer.",
        details: &[
            BookDetailRow {
                icon: DetailIcon::MapPin,
                label: "Sted",
                value: "Tønsbergs mørke side",
            },
            BookDetailRow {
                icon: DetailIcon::Ghost,
                label: "Antagonist",
                value: "En 105 år gammel nasist og inkarnat",
            },
            BookDetailRow {
                icon: DetailIcon::Shield,
                label: "Tema",
                value: "Skyld, vennskap, offer, agurkmiks",
            },
        ],
        author: AUTHOR,
        gradient: "indigo-fuchsia-rose",
    },
    BookRecord {
        id: "tempusterror",
        title: "Tempusterror",
        subtitle: "Boken basert på filmen",
        status: "I redigering (Bok 2)",
        tags: &["okkult", "horror", "humor", "tidsreise"],
        blurb: "De reddet verden. De trodde de hadde vunnet. De tok feil. I fortsettelsen på den \
                kritikerroste Pentangelen, oppdager Bendik og vennene hans at deres største seier \
                bare var åpningstrekket i et mye mørkere og mer forrædersk spill. Og hva skjer når \
                man er drevet av en sorg så dyp at man er villig til å ofre selve tidslinjen for å \
                vinne tilbake det han har tapt.",
        details: &[
            BookDetailRow {
                icon: DetailIcon::MapPin,
                label: "Sted",
                value: "Tønsbergs hovedpulsåre",
            },
            BookDetailRow {
                icon: DetailIcon::Timer,
                label: "Motiv",
                value: "Ritualer & skjulte kostnader",
            },
            BookDetailRow {
                icon: DetailIcon::Wand,
                label: "Tema",
                value: "En eldgammel pakt, et knust hjerte, og en sorg som er mektigere enn noen \
                        demon.",
            },
        ],
        author: AUTHOR,
        gradient: "amber-red-rose",
    },
    BookRecord {
        id: "taumageddon",
        title: "Taumageddon",
        subtitle: "Det store oppgjøret",
        status: "Under arbeid (Bok 3)",
        tags: &["okkult", "kosmisk", "oppgjør"],
        blurb: "Bendiks reise fra en bekymringsløs ungdom til en okkult eventyrer har kostet ham \
                alt. Nå, med vennskapet i ruiner og selve virkeligheten i ferd med å kollapse, \
                står han overfor sitt siste valg. Han må samle restene av teamet sitt for en \
                siste, desperat kamp, ikke bare mot monstre fra en annen dimensjon, men mot selve \
                ideen om skjebne. Det blir en siste konfrontasjon der den største seieren ikke er \
                å redde verden, men å redde sjelen til en venn.",
        details: &[
            BookDetailRow {
                icon: DetailIcon::MapPin,
                label: "Sted",
                value: "Vestfold og Jerusalem",
            },
            BookDetailRow {
                icon: DetailIcon::Ghost,
                label: "Trussel",
                value: "En gudefar med kjøleboks",
            },
            BookDetailRow {
                icon: DetailIcon::Shield,
                label: "Tema",
                value: "Skjebne vs. fri vilje",
            },
        ],
        author: AUTHOR,
        gradient: "sky-violet-fuchsia",
    },
];

/// The full book table, in series order.
pub fn books() -> &'static [BookRecord] {
    &BOOKS
}

/// Look up a book by its catalog id.
///
/// Returns `None` for unknown ids; the detail page renders nothing in
/// that case rather than failing.
pub fn book_by_id(id: &str) -> Option<&'static BookRecord> {
    BOOKS.iter().find(|b| b.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_ids_are_pairwise_distinct() {
        let ids: Vec<&str> = books().iter().map(|b| b.id).collect();
        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                assert_ne!(a, b, "duplicate book id");
            }
        }
    }

    #[test]
    fn every_book_resolves_by_id() {
        for book in books() {
            let found = book_by_id(book.id).expect("id should resolve");
            assert_eq!(found.title, book.title);
        }
    }

    #[test]
    fn unknown_id_resolves_to_none() {
        assert!(book_by_id("belsebubs-bomring").is_none());
    }

    #[test]
    fn catalog_is_not_empty() {
        assert!(!books().is_empty());
    }
}

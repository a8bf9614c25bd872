/// One entry in the lore codex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoreEntry {
    pub title: &'static str,
    pub body: &'static str,
}

/// One dated news post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewsPost {
    pub date: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
}

static LORE: [LoreEntry; 6] = [
    LoreEntry {
        title: "Taumaturgen på Teie",
        body: "En briljant, men sosialt klønete, magiker som kan bøye tid og rom, men som \
               fortsatt sliter med å forstå konseptet \"parkeringsavgift\".",
    },
    LoreEntry {
        title: "Nahemoth",
        body: "En eldgammel, sulten guddom fra den andre siden av virkeligheten, hvis nærvær \
               gjør at ting forvitrer og maten smaker litt verre.",
    },
    LoreEntry {
        title: "Gnostisisme",
        body: "Den radikale ideen om at vår virkelighet er et slags kosmisk fengsel, og at den \
               eneste veien ut er gjennom hemmelig kunnskap og en sunn dose mistenksomhet.",
    },
    LoreEntry {
        title: "Qliphoth",
        body: "De mørke, kaotiske og generelt ubehagelige skyggesidene av universet, beskrevet \
               av mystikere som foretrakk sine metaforer dystre og vanskelige å stave.",
    },
    LoreEntry {
        title: "Sofia / Sophia",
        body: "En guddommelig kraft av visdom som, i et øyeblikks ubetenksomhet, snublet og ved \
               et uhell skapte hele vår uperfekte verden.",
    },
    LoreEntry {
        title: "Agurkmiks",
        body: "En grønn, vederstyggelig substans som muligens er et biologisk våpen lekket fra \
               en mindre edel del av en demonisk skapning.",
    },
];

static NEWS: [NewsPost; 3] = [
    NewsPost {
        date: "2025-08-01",
        title: "Manus klart for innsending",
        excerpt: "Pentangelen er gjennom siste språkvask. Følgebrev og pitch spikres nå.",
    },
    NewsPost {
        date: "2025-07-15",
        title: "Plottråd: Torleif & forræderiet",
        excerpt: "Utforsker hvordan oppvåkning krasjer med lojalitet i Belsebubs Bomring.",
    },
    NewsPost {
        date: "2025-06-30",
        title: "Visuell research i Tønsberg",
        excerpt: "Notater fra Slottsfjellet, Vægteren og kolonihagene - detaljer til miljø.",
    },
];

pub fn lore_entries() -> &'static [LoreEntry] {
    &LORE
}

pub fn news_posts() -> &'static [NewsPost] {
    &NEWS
}

pub const ABOUT_TEXT: &str =
    "Det finnes kanskje et kart over Norge som du ikke finner i noe atlas. Et kart der de gamle \
     veiene i Vestfold ikke bare leder til hyggelige kystbyer, men til glemte ritualer og \
     portaler til andre lag av vår verden. Der kornsirklene på et jorde i Høyjord ikke er laget \
     av lystige studenter, men er beskjeder fra den andre siden. Og der bomringene på E-18 ikke \
     bare krever penger, men små biter av sjelen din som offer til en eldgammel, sulten guddom.\n\
     \n\
     Dette er verdenen til Pentangel-trilogien.\n\
     \n\
     Bli med Bendik, en aspirerende okkult eventyrer hvis entusiasme langt overgår hans \
     kompetanse; Robban, hans jordnære snekker-kompis som helst skulle ønske han var et annet \
     sted; og Emma, en uforutsigbar rebell med et talent for å skape kaos. Sammen med den \
     eksentriske og plagede taumaturgen Torleif, snubler de inn i en virkelighet som er mørkere, \
     dummere og uendelig mye mer komplisert enn de noensinne kunne ha forestilt seg.\n\
     \n\
     Gjennom tre bøker, Pentangelen, Tempusterror og Taumageddon, følger vi denne brokete \
     alliansen fra deres første, klønete kamp mot udødelige nazister, til en desperat \
     konfrontasjon med kosmiske mareritt, eldgamle pakter, og den mest skremmende trusselen av \
     alle: sorgen og sviket fra en venn.";

pub const AUTHOR_NAME: &str = "Torben Halvorsen Rygg";

pub const AUTHOR_BIO: &str =
    "Hva skjer når en dude med et bein solid plantet i Navs byråkratiske kalde maskineri og det \
     andre vilt trampende i et univers av gnostiske tekster, dårlig teologi og forkjærlighet for \
     skrekk bestemmer seg for å skrive en bok? Vel, du får noe sånt som dette.\n\
     \n\
     Jeg heter Torben, bor i utkanten av Tønsberg, og har tilbrakt en foruroligende stor del av \
     livet mitt med å se det absurde utfolde seg i statlige korridorer. Folk sier virkeligheten \
     er ofte rarere, dummere og mer uforutsigbar enn noen fiksjon du kan finne på. Så jeg \
     bestemte meg for å ta den utfordringen.\n\
     \n\
     Bøkene mine er et resultat av den innsikten. De er en slags kjærlig, men kaotisk, \
     frontkollisjon mellom det jeg synes er genuint fascinerende, og det som er genuint \
     tønsbergensisk: debatter om hvorvidt agurkmiks er en forbrytelse mot menneskeheten, \
     mysteriet med bomringer, og den dypt rotfestede troen på at byens helter kan redde verden. \
     Forvent raske dialoger, mysterier som er smartere enn de kanskje burde være, og en konstant \
     påminnelse om at selv når himmelen revner og glemte guder kommer gjennom illusjonen, er det \
     sannsynligvis noen i nærheten som er mer opptatt av om lompe egentlig er bedre enn \
     pølsebrød. Det er i hvert fall noe av det jeg prøver på. Håper du elsker det.";

//! Fixed theological word banks and book descriptions.
//!
//! The Old Testament bank carries Hebrew words with `H` Strong's codes, the
//! New Testament bank Greek words with `G` codes. Both are static tables.

use crate::testament::Testament;

/// One word-bank record: Portuguese word plus its original-language data.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WordRecord {
    pub word: &'static str,
    pub strong: &'static str,
    pub original: &'static str,
    pub transliteration: &'static str,
    pub root_meaning: &'static str,
    pub theme: &'static str,
}

const fn record(
    word: &'static str,
    strong: &'static str,
    original: &'static str,
    transliteration: &'static str,
    root_meaning: &'static str,
    theme: &'static str,
) -> WordRecord {
    WordRecord {
        word,
        strong,
        original,
        transliteration,
        root_meaning,
        theme,
    }
}

pub static OLD_TESTAMENT_WORDS: [WordRecord; 30] = [
    record("amor", "H160", "אַהֲבָה", "ahavah", "Amor, afeição", "amor"),
    record("paz", "H7965", "שָׁלוֹם", "shalom", "Paz, integridade, prosperidade", "paz"),
    record("graça", "H2580", "חֵן", "chen", "Graça, favor, beleza", "graça"),
    record("fé", "H530", "אֱמוּנָה", "emunah", "Fé, fidelidade, firmeza", "fé"),
    record("justiça", "H6666", "צְדָקָה", "tzedaqah", "Justiça, retidão", "justiça"),
    record("misericórdia", "H2617", "חֶסֶד", "chesed", "Misericórdia, bondade, lealdade", "misericórdia"),
    record("verdade", "H571", "אֱמֶת", "emet", "Verdade, firmeza, confiança", "verdade"),
    record("sabedoria", "H2451", "חָכְמָה", "chokmah", "Sabedoria, conhecimento", "sabedoria"),
    record("luz", "H216", "אוֹר", "or", "Luz, brilho, luminosidade", "luz"),
    record("vida", "H2416", "חַיִּים", "chayyim", "Vida, vivente, animado", "vida"),
    record("santidade", "H6944", "קֹדֶשׁ", "qodesh", "Santidade, separação", "santidade"),
    record("glória", "H3519", "כָּבוֹד", "kavod", "Glória, peso, honra", "glória"),
    record("força", "H3581", "כֹּחַ", "koach", "Força, poder, capacidade", "força"),
    record("esperança", "H8615", "תִּקְוָה", "tiqvah", "Esperança, expectativa", "esperança"),
    record("salvação", "H3444", "יְשׁוּעָה", "yeshuah", "Salvação, libertação", "salvação"),
    record("perdão", "H5545", "סָלַח", "salach", "Perdoar, absolver", "perdão"),
    record("bendito", "H1288", "בָּרַךְ", "barak", "Bendizer, ajoelhar", "bênção"),
    record("decreto", "H2706", "חֹק", "choq", "Decreto, estatuto, lei", "lei"),
    record("maravilha", "H6381", "פָּלָא", "pala", "Maravilha, algo extraordinário", "maravilha"),
    record("testemunho", "H5713", "עֵדוּת", "edut", "Testemunho, estatuto", "testemunho"),
    record("louvor", "H8416", "תְּהִלָּה", "tehillah", "Louvor, adoração", "louvor"),
    record("refúgio", "H4268", "מַחֲסֶה", "machaseh", "Refúgio, abrigo", "proteção"),
    record("caminho", "H1870", "דֶּרֶךְ", "derech", "Caminho, estrada, maneira", "caminho"),
    record("palavra", "H1697", "דָּבָר", "davar", "Palavra, assunto, coisa", "palavra"),
    record("criação", "H1254", "בָּרָא", "bara", "Criar, fazer", "criação"),
    record("espírito", "H7307", "רוּחַ", "ruach", "Espírito, vento, sopro", "espírito"),
    record("cordeiro", "H7716", "שֶׂה", "seh", "Cordeiro, ovelha", "sacrifício"),
    record("altar", "H4196", "מִזְבֵּחַ", "mizbeach", "Altar, lugar de sacrifício", "adoração"),
    record("sangue", "H1818", "דָּם", "dam", "Sangue, vida", "expiação"),
    record("aliança", "H1285", "בְּרִית", "berit", "Aliança, pacto", "aliança"),
];

pub static NEW_TESTAMENT_WORDS: [WordRecord; 30] = [
    record("amor", "G26", "ἀγάπη", "agape", "Amor benevolente, boa vontade", "amor"),
    record("paz", "G1515", "εἰρήνη", "eirene", "Paz, harmonia, tranquilidade", "paz"),
    record("graça", "G5485", "χάρις", "charis", "Graça, favor imerecido", "graça"),
    record("fé", "G4102", "πίστις", "pistis", "Fé, confiança, fidelidade", "fé"),
    record("justiça", "G1343", "δικαιοσύνη", "dikaiosyne", "Justiça, retidão", "justiça"),
    record("misericórdia", "G1656", "ἔλεος", "eleos", "Misericórdia, compaixão", "misericórdia"),
    record("verdade", "G225", "ἀλήθεια", "aletheia", "Verdade, realidade", "verdade"),
    record("sabedoria", "G4678", "σοφία", "sophia", "Sabedoria, conhecimento", "sabedoria"),
    record("luz", "G5457", "φῶς", "phos", "Luz, brilho, iluminação", "luz"),
    record("vida", "G2222", "ζωή", "zoe", "Vida, existência", "vida"),
    record("santificação", "G38", "ἁγιασμός", "hagiasmos", "Santificação, consagração", "santidade"),
    record("glória", "G1391", "δόξα", "doxa", "Glória, esplendor", "glória"),
    record("poder", "G1411", "δύναμις", "dynamis", "Poder, capacidade, milagre", "poder"),
    record("esperança", "G1680", "ἐλπίς", "elpis", "Esperança, expectativa confiante", "esperança"),
    record("salvação", "G4991", "σωτηρία", "soteria", "Salvação, libertação", "salvação"),
    record("perdão", "G859", "ἄφεσις", "aphesis", "Soltar, perdão, remissão", "perdão"),
    record("bendito", "G2127", "εὐλογέω", "eulogeo", "Bendizer, falar bem", "bênção"),
    record("doutrina", "G1319", "διδασκαλία", "didaskalia", "Doutrina, ensino", "ensino"),
    record("maravilha", "G5059", "τέρας", "teras", "Maravilha, portento", "maravilha"),
    record("testemunho", "G3141", "μαρτυρία", "martyria", "Testemunho, evidência", "testemunho"),
    record("louvor", "G1868", "ἔπαινος", "epainos", "Louvor, aprovação", "louvor"),
    record("refúgio", "G2702", "καταφεύγω", "katapheugo", "Refugiar-se, buscar proteção", "proteção"),
    record("caminho", "G3598", "ὁδός", "hodos", "Caminho, estrada, modo", "caminho"),
    record("palavra", "G3056", "λόγος", "logos", "Palavra, discurso, razão", "palavra"),
    record("criação", "G2937", "κτίσις", "ktisis", "Criação, criatura", "criação"),
    record("espírito", "G4151", "πνεῦμα", "pneuma", "Espírito, vento, sopro", "espírito"),
    record("cordeiro", "G286", "ἀμνός", "amnos", "Cordeiro", "sacrifício"),
    record("templo", "G3485", "ναός", "naos", "Templo, santuário interior", "adoração"),
    record("sangue", "G129", "αἷμα", "haima", "Sangue", "expiação"),
    record("aliança", "G1242", "διαθήκη", "diatheke", "Aliança, testamento", "aliança"),
];

static BOOK_DESCRIPTIONS: [(&str, &str); 66] = [
    ("genesis", "Gênesis, o livro das origens"),
    ("exodo", "Êxodo, a narrativa da libertação do Egito"),
    ("levitico", "Levítico, o livro da santidade"),
    ("numeros", "Números, as wanderings no deserto"),
    ("deuteronomio", "Deuteronômio, a renovação da aliança"),
    ("josue", "Josué, a conquista da terra prometida"),
    ("juizes", "Juízes, o ciclo de apostasia"),
    ("rute", "Rute, a história de redenção"),
    ("1samuel", "1 Samuel, a transição para a monarquia"),
    ("2samuel", "2 Samuel, o reinado de Davi"),
    ("1reis", "1 Reis, a glória e divisão do reino"),
    ("2reis", "2 Reis, a queda dos reinos"),
    ("1cronicas", "1 Crônicas, que reconta a história de Israel focando na adoração"),
    ("2cronicas", "2 Crônicas, o templo e a adoração"),
    ("esdras", "Esdras, o retorno do exílio"),
    ("neemias", "Neemias, a reconstrução dos muros"),
    ("ester", "Ester, a providência divina"),
    ("jo", "Jó, o problema do sofrimento"),
    ("salmos", "Salmos, o livro de orações e louvor"),
    ("proverbios", "Provérbios, a sabedoria prática"),
    ("eclesiastes", "Eclesiastes, a busca pelo sentido da vida"),
    ("cantares", "Cantares, a celebração do amor"),
    ("isaias", "Isaías, o evangelho do Antigo Testamento"),
    ("jeremias", "Jeremias, o profeta do lamento"),
    ("lamentacoes", "Lamentações, o luto pela queda de Jerusalém"),
    ("ezequiel", "Ezequiel, a glória de Deus no exílio"),
    ("daniel", "Daniel, a soberania de Deus nas nações"),
    ("oseias", "Oséias, o amor fiel de Deus"),
    ("joel", "Joel, o dia do Senhor"),
    ("amos", "Amós, a justiça social de Deus"),
    ("obadias", "Obadias, o juízo sobre Edom"),
    ("jonas", "Jonas, a misericórdia divina"),
    ("miqueias", "Miqueias, o juízo e a esperança"),
    ("naum", "Naum, a queda de Nínive"),
    ("habacuc", "Habacuque, a fé diante do mistério"),
    ("sofonias", "Sofonias, o dia da ira do Senhor"),
    ("ageu", "Ageu, a reconstrução do templo"),
    ("zacarias", "Zacarias, o Messias e Seu reino"),
    ("malaquias", "Malaquias, a preparação para o Messias"),
    ("mateus", "Mateus, o evangelho do Reino"),
    ("marcos", "Marcos, o evangelho da ação"),
    ("lucas", "Lucas, o evangelho da compaixão"),
    ("joao", "João, o evangelho da divindade de Cristo"),
    ("atos", "Atos, a expansão da igreja"),
    ("romanos", "Romanos, a justificação pela fé"),
    ("1corintios", "1 Coríntios, a carta sobre a vida em comunidade"),
    ("2corintios", "2 Coríntios, o ministério da reconciliação"),
    ("galatas", "Gálatas, a liberdade na graça"),
    ("efesios", "Efésios, a posição do crente em Cristo"),
    ("filipenses", "Filipenses, a alegria em Cristo"),
    ("colossenses", "Colossenses, a supremacia de Cristo"),
    ("1tessalonicenses", "1 Tessalonicenses, a esperança da volta de Cristo"),
    ("2tessalonicenses", "2 Tessalonicenses, o dia do Senhor"),
    ("1timoteo", "1 Timóteo, a conduta na igreja"),
    ("2timoteo", "2 Timóteo, a fidelidade ao ministério"),
    ("tito", "Tito, a organização da igreja"),
    ("filemom", "Filemom, a intercessão cristã"),
    ("hebreus", "Hebreus, a superioridade de Cristo"),
    ("tiago", "Tiago, a fé que se manifesta em obras"),
    ("1pedro", "1 Pedro, a esperança na aflição"),
    ("2pedro", "2 Pedro, o crescimento no conhecimento"),
    ("1joao", "1 João, a comunhão com Deus"),
    ("2joao", "2 João, a verdade e o amor"),
    ("3joao", "3 João, a hospitalidade cristã"),
    ("judas", "Judas, a contenda pela fé"),
    ("apocalipse", "Apocalipse, a consumação de todas as coisas"),
];

pub fn bank(testament: Testament) -> &'static [WordRecord] {
    match testament {
        Testament::Old => &OLD_TESTAMENT_WORDS,
        Testament::New => &NEW_TESTAMENT_WORDS,
    }
}

/// Find a record by Portuguese word, falling back to theme. Matching is
/// case-insensitive.
pub fn lookup(testament: Testament, word: &str) -> Option<&'static WordRecord> {
    let wanted = word.trim().to_lowercase();
    let records = bank(testament);
    records
        .iter()
        .find(|record| record.word == wanted)
        .or_else(|| records.iter().find(|record| record.theme == wanted))
}

pub fn book_description(book: &str) -> Option<&'static str> {
    let lower = book.to_lowercase();
    BOOK_DESCRIPTIONS
        .iter()
        .find(|(id, _)| *id == lower)
        .map(|(_, description)| *description)
}

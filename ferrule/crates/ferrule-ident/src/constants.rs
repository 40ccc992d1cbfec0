//! Known core identifiers and their baked hash codes.
//!
//! These are the symbols and keywords the core library refers to as literal
//! constants. Their hash codes were computed ahead of time and embedded in
//! generated code, so they double as a fixed regression table for
//! [`hash_qualified`].

use crate::error::IdentResult;
use crate::hash::{hash_qualified, IdentKind};
use crate::name::QualifiedName;
use crate::table::KeywordTable;

/// A known identifier with its precomputed hash code
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Constant {
    pub kind: IdentKind,
    pub namespace: Option<&'static str>,
    pub name: &'static str,
    /// Hash code baked into generated code
    pub hash: i32,
}

impl Constant {
    pub const fn new(
        kind: IdentKind,
        namespace: Option<&'static str>,
        name: &'static str,
        hash: i32,
    ) -> Self {
        Self {
            kind,
            namespace,
            name,
            hash,
        }
    }

    /// Qualified name of this constant
    ///
    /// # Errors
    ///
    /// Never fails for entries of [`CORE_CONSTANTS`].
    pub fn qualified_name(&self) -> IdentResult<QualifiedName> {
        QualifiedName::new(self.namespace, self.name)
    }

    /// Hash code recomputed from the name
    pub fn computed_hash(&self) -> IdentResult<i32> {
        Ok(hash_qualified(self.kind, &self.qualified_name()?))
    }
}

/// Install every keyword of [`CORE_CONSTANTS`] into `table`
///
/// Returns the number of keyword constants processed.
pub fn preload(table: &KeywordTable) -> IdentResult<usize> {
    let mut count = 0;
    for constant in CORE_CONSTANTS.iter().filter(|c| c.kind == IdentKind::Keyword) {
        table.get_or_create(constant.qualified_name()?);
        count += 1;
    }
    log::debug!("preloaded {} core keywords", count);
    Ok(count)
}

/// Symbols and keywords referenced as constants by the core library
pub static CORE_CONSTANTS: &[Constant] = &[
    Constant::new(IdentKind::Symbol, None, "form", 16469056),
    Constant::new(IdentKind::Symbol, None, "tag", 350170304),
    Constant::new(IdentKind::Symbol, None, "&", -2144855648),
    Constant::new(IdentKind::Symbol, None, "uuid", -504564192),
    Constant::new(IdentKind::Symbol, None, "case*", -1938255072),
    Constant::new(IdentKind::Symbol, None, "end", 1372345569),
    Constant::new(IdentKind::Symbol, None, "defrecord*", -1936366207),
    Constant::new(IdentKind::Symbol, None, "base", 1825810849),
    Constant::new(IdentKind::Symbol, None, "obj", -1672671807),
    Constant::new(IdentKind::Symbol, None, "fqn", -1749334463),
    Constant::new(IdentKind::Symbol, None, "first", 996428481),
    Constant::new(IdentKind::Symbol, None, "try", -1273693247),
    Constant::new(IdentKind::Symbol, None, "has-nil?", 825886722),
    Constant::new(IdentKind::Symbol, None, "rear", -900164830),
    Constant::new(IdentKind::Symbol, None, "hierarchy", 587061186),
    Constant::new(IdentKind::Symbol, None, "iter", -1346195486),
    Constant::new(IdentKind::Symbol, None, "step", -1365547645),
    Constant::new(IdentKind::Symbol, None, "boolean", -278886877),
    Constant::new(IdentKind::Symbol, None, "update-count", -411982269),
    Constant::new(IdentKind::Symbol, None, "method-table", -1878263165),
    Constant::new(IdentKind::Keyword, None, "ready", 1086465795),
    Constant::new(IdentKind::Symbol, None, "chunk", 449371907),
    Constant::new(IdentKind::Symbol, None, "i", 253690212),
    Constant::new(IdentKind::Symbol, None, "rest", 398835108),
    Constant::new(IdentKind::Keyword, None, "meta", 1499536964),
    Constant::new(IdentKind::Keyword, None, "dup", 556298533),
    Constant::new(IdentKind::Symbol, None, "comp", -1462482139),
    Constant::new(IdentKind::Symbol, None, "dispatch-fn", -1401088155),
    Constant::new(IdentKind::Symbol, None, "buffer", -2037140571),
    Constant::new(IdentKind::Keyword, None, "else", -1508377146),
    Constant::new(IdentKind::Symbol, None, "left", 1241415590),
    Constant::new(IdentKind::Symbol, None, "ns*", 1840949383),
    Constant::new(IdentKind::Keyword, Some("cljs.core"), "none", 926646439),
    Constant::new(IdentKind::Symbol, None, "shift", -1657295705),
    Constant::new(IdentKind::Symbol, None, "iters", 719353031),
    Constant::new(IdentKind::Symbol, None, "xform", -85179481),
    Constant::new(IdentKind::Keyword, None, "validator", -1966190681),
    Constant::new(IdentKind::Symbol, None, "finally", -1065347064),
    Constant::new(IdentKind::Keyword, None, "default", -1987822328),
    Constant::new(IdentKind::Symbol, None, "prefer-table", 462168584),
    Constant::new(IdentKind::Symbol, None, "loop*", 615029416),
    Constant::new(IdentKind::Symbol, None, "watches", 1367433992),
    Constant::new(IdentKind::Keyword, None, "ns", 441598760),
    Constant::new(IdentKind::Keyword, None, "pending", -220036727),
    Constant::new(IdentKind::Symbol, None, "bitmap", 501334601),
    Constant::new(IdentKind::Symbol, None, "_seq", -449557847),
    Constant::new(IdentKind::Symbol, None, "nil-val", -513933559),
    Constant::new(IdentKind::Keyword, None, "value", 305978217),
    Constant::new(IdentKind::Symbol, None, "v", 1661996586),
    Constant::new(IdentKind::Symbol, None, "riter", -237834262),
    Constant::new(IdentKind::Symbol, None, "__hash", -1328796629),
    Constant::new(IdentKind::Symbol, None, "meta", -1154898805),
    Constant::new(IdentKind::Symbol, None, "_meta", -1716892533),
    Constant::new(IdentKind::Keyword, None, "to.have.length", -1972832085),
    Constant::new(IdentKind::Symbol, None, "afn", 216963467),
    Constant::new(IdentKind::Symbol, None, "tree", 1444219499),
    Constant::new(IdentKind::Symbol, None, "fn", 465265323),
    Constant::new(IdentKind::Symbol, None, "front", 117022539),
    Constant::new(IdentKind::Symbol, None, "buf", 1426618187),
    Constant::new(IdentKind::Symbol, None, "next-entry", 1091342476),
    Constant::new(IdentKind::Keyword, None, "val", 128701612),
    Constant::new(IdentKind::Symbol, None, "key", 124488940),
    Constant::new(IdentKind::Symbol, None, "_next", 101877036),
    Constant::new(IdentKind::Keyword, None, "to.contain", -2129859892),
    Constant::new(IdentKind::Symbol, None, "root-iter", 1974672108),
    Constant::new(IdentKind::Symbol, None, "do", 1686842252),
    Constant::new(IdentKind::Symbol, None, "vec", 982683596),
    Constant::new(IdentKind::Keyword, None, "fallback-impl", -1501286995),
    Constant::new(IdentKind::Keyword, None, "negation", -755634643),
    Constant::new(IdentKind::Keyword, None, "keyword-fn", -64566675),
    Constant::new(IdentKind::Keyword, None, "flush-on-newline", -151457939),
    Constant::new(IdentKind::Symbol, None, "default-dispatch-val", -1231201266),
    Constant::new(IdentKind::Keyword, None, "no-test", -1679482642),
    Constant::new(IdentKind::Symbol, None, "validator", -325659154),
    Constant::new(IdentKind::Symbol, None, "letfn*", -110097810),
    Constant::new(IdentKind::Symbol, None, "if", 1181717262),
    Constant::new(IdentKind::Keyword, None, "empty", 767870958),
    Constant::new(IdentKind::Symbol, None, "arr", 2115492975),
    Constant::new(IdentKind::Symbol, None, "new", -444906321),
    Constant::new(IdentKind::Keyword, None, "descendants", 1824886031),
    Constant::new(IdentKind::Symbol, None, "ns", 2082130287),
    Constant::new(IdentKind::Symbol, None, "completed", 1154475024),
    Constant::new(IdentKind::Keyword, None, "ancestors", -776045424),
    Constant::new(IdentKind::Symbol, None, "value", 1946509744),
    Constant::new(IdentKind::Symbol, None, "name", -810760592),
    Constant::new(IdentKind::Keyword, None, "readably", 1129599760),
    Constant::new(IdentKind::Keyword, None, "more-marker", -14717935),
    Constant::new(IdentKind::Symbol, None, "fields", -291534703),
    Constant::new(IdentKind::Symbol, None, "meta3875", 1452884209),
    Constant::new(IdentKind::Symbol, None, "method-cache", 1230193905),
    Constant::new(IdentKind::Symbol, None, "edit", -1302639),
    Constant::new(IdentKind::Symbol, None, "editable?", -164945806),
    Constant::new(IdentKind::Symbol, None, "base-count", -1180647182),
    Constant::new(IdentKind::Symbol, None, "collision-hash", -35831342),
    Constant::new(IdentKind::Keyword, None, "keys", 1068423698),
    Constant::new(IdentKind::Symbol, None, "deftype*", 962659890),
    Constant::new(IdentKind::Symbol, None, "let*", 1920721458),
    Constant::new(IdentKind::Symbol, None, "start", 1285322546),
    Constant::new(IdentKind::Symbol, None, "sourceIter", 1068220306),
    Constant::new(IdentKind::Symbol, None, "coll", -1006698606),
    Constant::new(IdentKind::Symbol, None, "not-native", -236392494),
    Constant::new(IdentKind::Symbol, None, "js*", -1134233646),
    Constant::new(IdentKind::Symbol, None, "strobj", 1088091283),
    Constant::new(IdentKind::Symbol, None, "_rest", -2100466189),
    Constant::new(IdentKind::Symbol, None, "fn*", -752876845),
    Constant::new(IdentKind::Symbol, None, "val", 1769233139),
    Constant::new(IdentKind::Symbol, None, "ascending?", -1938452653),
    Constant::new(IdentKind::Symbol, None, "recur", 1202958259),
    Constant::new(IdentKind::Symbol, None, "xf", 2042434515),
    Constant::new(IdentKind::Symbol, None, "ci", 2049808339),
    Constant::new(IdentKind::Keyword, None, "status", -1997798413),
    Constant::new(IdentKind::Keyword, None, "print-length", 1931866356),
    Constant::new(IdentKind::Symbol, None, "state", -348086572),
    Constant::new(IdentKind::Keyword, None, "ok", 967785236),
    Constant::new(IdentKind::Symbol, None, "vals", -1886377036),
    Constant::new(IdentKind::Symbol, None, "all", -1762306027),
    Constant::new(IdentKind::Keyword, Some("cljs.core"), "halt", -1049036715),
    Constant::new(IdentKind::Symbol, None, "cached-hierarchy", -1085460203),
    Constant::new(IdentKind::Symbol, None, "s", -948495851),
    Constant::new(IdentKind::Keyword, None, "parents", -2027538891),
    Constant::new(IdentKind::Symbol, None, "cnt", 1924510325),
    Constant::new(IdentKind::Symbol, None, "meta1824", -72681867),
    Constant::new(IdentKind::Keyword, None, "expected", 1583670997),
    Constant::new(IdentKind::Symbol, None, "node", -2073234571),
    Constant::new(IdentKind::Symbol, None, "sym", 195671222),
    Constant::new(IdentKind::Symbol, None, "sb", -1249746442),
    Constant::new(IdentKind::Symbol, None, "seed", 1709144854),
    Constant::new(IdentKind::Symbol, None, "prev-seed", 2126381367),
    Constant::new(IdentKind::Symbol, None, "_hash", -2130838312),
    Constant::new(IdentKind::Symbol, None, "keys", -1586012071),
    Constant::new(IdentKind::Symbol, None, "set!", 250714521),
    Constant::new(IdentKind::Keyword, None, "tag", -1290361223),
    Constant::new(IdentKind::Symbol, None, "tree-map", 1373073049),
    Constant::new(IdentKind::Symbol, None, ".", 1975675962),
    Constant::new(IdentKind::Keyword, None, "equal", -1921681350),
    Constant::new(IdentKind::Symbol, None, "var", 870848730),
    Constant::new(IdentKind::Keyword, None, "mutable", 875778266),
    Constant::new(IdentKind::Symbol, None, "quote", 1377916282),
    Constant::new(IdentKind::Keyword, None, "members", 159001018),
    Constant::new(IdentKind::Symbol, None, "root", 1191874074),
    Constant::new(IdentKind::Symbol, None, "multi", 1450238522),
    Constant::new(IdentKind::Symbol, None, "str", -1564826950),
    Constant::new(IdentKind::Symbol, None, "next", 1522830042),
    Constant::new(IdentKind::Symbol, None, "nodes", -459054278),
    Constant::new(IdentKind::Symbol, None, "seen", 1121531738),
    Constant::new(IdentKind::Symbol, None, "hash-map", -439030950),
    Constant::new(IdentKind::Symbol, None, "catch", -1616370245),
    Constant::new(IdentKind::Keyword, None, "alt-impl", 670969595),
    Constant::new(IdentKind::Symbol, None, "ext-map-iter", -1215982757),
    Constant::new(IdentKind::Symbol, None, "tail", 494507963),
    Constant::new(IdentKind::Symbol, None, "record", 861424668),
    Constant::new(IdentKind::Symbol, None, "mseq", 1602647196),
    Constant::new(IdentKind::Symbol, None, "count", -514511684),
    Constant::new(IdentKind::Keyword, None, "keywordize-keys", 1310784252),
    Constant::new(IdentKind::Symbol, None, "current", 552492924),
    Constant::new(IdentKind::Symbol, None, "off", -2047994980),
    Constant::new(IdentKind::Symbol, None, "stack", 847125597),
    Constant::new(IdentKind::Symbol, None, "transient-map", 351764893),
    Constant::new(IdentKind::Keyword, None, "guard", -873147811),
    Constant::new(IdentKind::Symbol, None, "prev", 43462301),
    Constant::new(IdentKind::Symbol, None, "len", -1230778691),
    Constant::new(IdentKind::Symbol, None, "right", 1187949694),
    Constant::new(IdentKind::Symbol, None, "throw", 595905694),
    Constant::new(IdentKind::Symbol, None, "fseq", -1466412450),
    Constant::new(IdentKind::Symbol, None, "chunk-next", -547810434),
    Constant::new(IdentKind::Keyword, None, "message", -406056002),
    Constant::new(IdentKind::Keyword, None, "assertion", -1645134882),
    Constant::new(IdentKind::Keyword, Some("cljs.core"), "not-found", -1572889185),
    Constant::new(IdentKind::Symbol, None, "more", -418290273),
    Constant::new(IdentKind::Symbol, None, "def", 597100991),
    Constant::new(IdentKind::Symbol, None, "f", 43394975),
    Constant::new(IdentKind::Symbol, None, "next-iter", 1526626239),
];

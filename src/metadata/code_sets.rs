// Copyright (C) 2009 The Libphonenumber Authors
// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Static tables derived from the metadata the resources were generated
//! from: which region codes a country calling code maps to, and which keys
//! have alternate-format or short-number resources linked in at all. The
//! tables must stay in sync with the packaged resources.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// A mapping from a country calling code to the region codes it serves, with
/// the main country for the code listed first. Non-geographical entity codes
/// map to the single "001" sentinel region.
static COUNTRY_CODE_TO_REGION_CODE_MAP: LazyLock<HashMap<i32, Vec<&'static str>>> =
    LazyLock::new(|| {
        HashMap::from([
            (1, vec!["US", "AG", "AI", "AS", "BB", "BM", "BS", "CA", "DM", "DO", "GD", "GU",
                     "JM", "KN", "KY", "LC", "MP", "MS", "PR", "SX", "TC", "TT", "VC", "VG",
                     "VI"]),
            (7, vec!["RU", "KZ"]),
            (20, vec!["EG"]),
            (27, vec!["ZA"]),
            (30, vec!["GR"]),
            (31, vec!["NL"]),
            (32, vec!["BE"]),
            (33, vec!["FR"]),
            (34, vec!["ES"]),
            (36, vec!["HU"]),
            (39, vec!["IT", "VA"]),
            (40, vec!["RO"]),
            (41, vec!["CH"]),
            (43, vec!["AT"]),
            (44, vec!["GB", "GG", "IM", "JE"]),
            (45, vec!["DK"]),
            (46, vec!["SE"]),
            (47, vec!["NO", "SJ"]),
            (48, vec!["PL"]),
            (49, vec!["DE"]),
            (51, vec!["PE"]),
            (52, vec!["MX"]),
            (53, vec!["CU"]),
            (54, vec!["AR"]),
            (55, vec!["BR"]),
            (56, vec!["CL"]),
            (57, vec!["CO"]),
            (58, vec!["VE"]),
            (60, vec!["MY"]),
            (61, vec!["AU", "CC", "CX"]),
            (62, vec!["ID"]),
            (63, vec!["PH"]),
            (64, vec!["NZ"]),
            (65, vec!["SG"]),
            (66, vec!["TH"]),
            (81, vec!["JP"]),
            (82, vec!["KR"]),
            (84, vec!["VN"]),
            (86, vec!["CN"]),
            (90, vec!["TR"]),
            (91, vec!["IN"]),
            (92, vec!["PK"]),
            (93, vec!["AF"]),
            (94, vec!["LK"]),
            (95, vec!["MM"]),
            (98, vec!["IR"]),
            (211, vec!["SS"]),
            (212, vec!["MA", "EH"]),
            (213, vec!["DZ"]),
            (216, vec!["TN"]),
            (218, vec!["LY"]),
            (220, vec!["GM"]),
            (221, vec!["SN"]),
            (222, vec!["MR"]),
            (223, vec!["ML"]),
            (224, vec!["GN"]),
            (225, vec!["CI"]),
            (226, vec!["BF"]),
            (227, vec!["NE"]),
            (228, vec!["TG"]),
            (229, vec!["BJ"]),
            (230, vec!["MU"]),
            (231, vec!["LR"]),
            (232, vec!["SL"]),
            (233, vec!["GH"]),
            (234, vec!["NG"]),
            (235, vec!["TD"]),
            (236, vec!["CF"]),
            (237, vec!["CM"]),
            (238, vec!["CV"]),
            (239, vec!["ST"]),
            (240, vec!["GQ"]),
            (241, vec!["GA"]),
            (242, vec!["CG"]),
            (243, vec!["CD"]),
            (244, vec!["AO"]),
            (245, vec!["GW"]),
            (246, vec!["IO"]),
            (247, vec!["AC"]),
            (248, vec!["SC"]),
            (249, vec!["SD"]),
            (250, vec!["RW"]),
            (251, vec!["ET"]),
            (252, vec!["SO"]),
            (253, vec!["DJ"]),
            (254, vec!["KE"]),
            (255, vec!["TZ"]),
            (256, vec!["UG"]),
            (257, vec!["BI"]),
            (258, vec!["MZ"]),
            (260, vec!["ZM"]),
            (261, vec!["MG"]),
            (262, vec!["RE", "YT"]),
            (263, vec!["ZW"]),
            (264, vec!["NA"]),
            (265, vec!["MW"]),
            (266, vec!["LS"]),
            (267, vec!["BW"]),
            (268, vec!["SZ"]),
            (269, vec!["KM"]),
            (290, vec!["SH", "TA"]),
            (291, vec!["ER"]),
            (297, vec!["AW"]),
            (298, vec!["FO"]),
            (299, vec!["GL"]),
            (350, vec!["GI"]),
            (351, vec!["PT"]),
            (352, vec!["LU"]),
            (353, vec!["IE"]),
            (354, vec!["IS"]),
            (355, vec!["AL"]),
            (356, vec!["MT"]),
            (357, vec!["CY"]),
            (358, vec!["FI", "AX"]),
            (359, vec!["BG"]),
            (370, vec!["LT"]),
            (371, vec!["LV"]),
            (372, vec!["EE"]),
            (373, vec!["MD"]),
            (374, vec!["AM"]),
            (375, vec!["BY"]),
            (376, vec!["AD"]),
            (377, vec!["MC"]),
            (378, vec!["SM"]),
            (380, vec!["UA"]),
            (381, vec!["RS"]),
            (382, vec!["ME"]),
            (383, vec!["XK"]),
            (385, vec!["HR"]),
            (386, vec!["SI"]),
            (387, vec!["BA"]),
            (389, vec!["MK"]),
            (420, vec!["CZ"]),
            (421, vec!["SK"]),
            (423, vec!["LI"]),
            (500, vec!["FK"]),
            (501, vec!["BZ"]),
            (502, vec!["GT"]),
            (503, vec!["SV"]),
            (504, vec!["HN"]),
            (505, vec!["NI"]),
            (506, vec!["CR"]),
            (507, vec!["PA"]),
            (508, vec!["PM"]),
            (509, vec!["HT"]),
            (590, vec!["GP", "BL", "MF"]),
            (591, vec!["BO"]),
            (592, vec!["GY"]),
            (593, vec!["EC"]),
            (594, vec!["GF"]),
            (595, vec!["PY"]),
            (596, vec!["MQ"]),
            (597, vec!["SR"]),
            (598, vec!["UY"]),
            (599, vec!["CW", "BQ"]),
            (670, vec!["TL"]),
            (672, vec!["NF"]),
            (673, vec!["BN"]),
            (674, vec!["NR"]),
            (675, vec!["PG"]),
            (676, vec!["TO"]),
            (677, vec!["SB"]),
            (678, vec!["VU"]),
            (679, vec!["FJ"]),
            (680, vec!["PW"]),
            (681, vec!["WF"]),
            (682, vec!["CK"]),
            (683, vec!["NU"]),
            (685, vec!["WS"]),
            (686, vec!["KI"]),
            (687, vec!["NC"]),
            (688, vec!["TV"]),
            (689, vec!["PF"]),
            (690, vec!["TK"]),
            (691, vec!["FM"]),
            (692, vec!["MH"]),
            (800, vec!["001"]),
            (808, vec!["001"]),
            (850, vec!["KP"]),
            (852, vec!["HK"]),
            (853, vec!["MO"]),
            (855, vec!["KH"]),
            (856, vec!["LA"]),
            (870, vec!["001"]),
            (878, vec!["001"]),
            (880, vec!["BD"]),
            (881, vec!["001"]),
            (882, vec!["001"]),
            (883, vec!["001"]),
            (886, vec!["TW"]),
            (888, vec!["001"]),
            (960, vec!["MV"]),
            (961, vec!["LB"]),
            (962, vec!["JO"]),
            (963, vec!["SY"]),
            (964, vec!["IQ"]),
            (965, vec!["KW"]),
            (966, vec!["SA"]),
            (967, vec!["YE"]),
            (968, vec!["OM"]),
            (970, vec!["PS"]),
            (971, vec!["AE"]),
            (972, vec!["IL"]),
            (973, vec!["BH"]),
            (974, vec!["QA"]),
            (975, vec!["BT"]),
            (976, vec!["MN"]),
            (977, vec!["NP"]),
            (979, vec!["001"]),
            (992, vec!["TJ"]),
            (993, vec!["TM"]),
            (994, vec!["AZ"]),
            (995, vec!["GE"]),
            (996, vec!["KG"]),
            (998, vec!["UZ"]),
        ])
    });

/// Country calling codes there are alternate format resources for. If the set
/// has an entry for a code, then a resource for that code should be linked in.
static ALTERNATE_FORMATS_COUNTRY_CODES: LazyLock<HashSet<i32>> = LazyLock::new(|| {
    HashSet::from([
        7, 20, 27, 30, 31, 34, 36, 39, 43, 44, 49, 52, 54, 55, 58, 61, 62, 63, 64, 66, 81,
        84, 90, 91, 94, 95, 255, 350, 351, 352, 358, 359, 372, 373, 380, 381, 385, 505, 506,
        595, 675, 676, 679, 974,
    ])
});

/// Region codes there are short number resources for.
static SHORT_NUMBERS_REGION_CODES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    COUNTRY_CODE_TO_REGION_CODE_MAP
        .values()
        .flatten()
        .copied()
        .filter(|region_code| *region_code != "001")
        .collect()
});

pub fn country_code_to_region_code_map() -> &'static HashMap<i32, Vec<&'static str>> {
    &COUNTRY_CODE_TO_REGION_CODE_MAP
}

pub fn alternate_formats_country_codes() -> &'static HashSet<i32> {
    &ALTERNATE_FORMATS_COUNTRY_CODES
}

pub fn short_numbers_region_codes() -> &'static HashSet<&'static str> {
    &SHORT_NUMBERS_REGION_CODES
}

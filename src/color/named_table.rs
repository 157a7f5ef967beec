//! Named color reference data
//!
//! Embedded `(name, hex)` pairs used by the named-color resolver: the CSS
//! named colors followed by common apparel/trend color names. Order matters
//! only for exact ΔE ties, where the earlier entry wins.

pub(crate) static NAMED_COLORS: &[(&str, &str)] = &[
    // CSS named colors
    ("Alice Blue", "#F0F8FF"),
    ("Antique White", "#FAEBD7"),
    ("Aqua", "#00FFFF"),
    ("Aquamarine", "#7FFFD4"),
    ("Azure", "#F0FFFF"),
    ("Beige", "#F5F5DC"),
    ("Bisque", "#FFE4C4"),
    ("Black", "#000000"),
    ("Blanched Almond", "#FFEBCD"),
    ("Blue", "#0000FF"),
    ("Blue Violet", "#8A2BE2"),
    ("Brown", "#A52A2A"),
    ("Burlywood", "#DEB887"),
    ("Cadet Blue", "#5F9EA0"),
    ("Chartreuse", "#7FFF00"),
    ("Chocolate", "#D2691E"),
    ("Coral", "#FF7F50"),
    ("Cornflower Blue", "#6495ED"),
    ("Cornsilk", "#FFF8DC"),
    ("Crimson", "#DC143C"),
    ("Dark Blue", "#00008B"),
    ("Dark Cyan", "#008B8B"),
    ("Dark Goldenrod", "#B8860B"),
    ("Dark Gray", "#A9A9A9"),
    ("Dark Green", "#006400"),
    ("Dark Khaki", "#BDB76B"),
    ("Dark Magenta", "#8B008B"),
    ("Dark Olive Green", "#556B2F"),
    ("Dark Orange", "#FF8C00"),
    ("Dark Orchid", "#9932CC"),
    ("Dark Red", "#8B0000"),
    ("Dark Salmon", "#E9967A"),
    ("Dark Sea Green", "#8FBC8F"),
    ("Dark Slate Blue", "#483D8B"),
    ("Dark Slate Gray", "#2F4F4F"),
    ("Dark Turquoise", "#00CED1"),
    ("Dark Violet", "#9400D3"),
    ("Deep Pink", "#FF1493"),
    ("Deep Sky Blue", "#00BFFF"),
    ("Dim Gray", "#696969"),
    ("Dodger Blue", "#1E90FF"),
    ("Fire Brick", "#B22222"),
    ("Floral White", "#FFFAF0"),
    ("Forest Green", "#228B22"),
    ("Fuchsia", "#FF00FF"),
    ("Gainsboro", "#DCDCDC"),
    ("Ghost White", "#F8F8FF"),
    ("Gold", "#FFD700"),
    ("Goldenrod", "#DAA520"),
    ("Gray", "#808080"),
    ("Green", "#008000"),
    ("Green Yellow", "#ADFF2F"),
    ("Honeydew", "#F0FFF0"),
    ("Hot Pink", "#FF69B4"),
    ("Indian Red", "#CD5C5C"),
    ("Indigo", "#4B0082"),
    ("Ivory", "#FFFFF0"),
    ("Khaki", "#F0E68C"),
    ("Lavender", "#E6E6FA"),
    ("Lavender Blush", "#FFF0F5"),
    ("Lawn Green", "#7CFC00"),
    ("Lemon Chiffon", "#FFFACD"),
    ("Light Blue", "#ADD8E6"),
    ("Light Coral", "#F08080"),
    ("Light Cyan", "#E0FFFF"),
    ("Light Goldenrod Yellow", "#FAFAD2"),
    ("Light Gray", "#D3D3D3"),
    ("Light Green", "#90EE90"),
    ("Light Pink", "#FFB6C1"),
    ("Light Salmon", "#FFA07A"),
    ("Light Sea Green", "#20B2AA"),
    ("Light Sky Blue", "#87CEFA"),
    ("Light Slate Gray", "#778899"),
    ("Light Steel Blue", "#B0C4DE"),
    ("Light Yellow", "#FFFFE0"),
    ("Lime", "#00FF00"),
    ("Lime Green", "#32CD32"),
    ("Linen", "#FAF0E6"),
    ("Maroon", "#800000"),
    ("Medium Aquamarine", "#66CDAA"),
    ("Medium Blue", "#0000CD"),
    ("Medium Orchid", "#BA55D3"),
    ("Medium Purple", "#9370DB"),
    ("Medium Sea Green", "#3CB371"),
    ("Medium Slate Blue", "#7B68EE"),
    ("Medium Spring Green", "#00FA9A"),
    ("Medium Turquoise", "#48D1CC"),
    ("Medium Violet Red", "#C71585"),
    ("Midnight Blue", "#191970"),
    ("Mint Cream", "#F5FFFA"),
    ("Misty Rose", "#FFE4E1"),
    ("Moccasin", "#FFE4B5"),
    ("Navajo White", "#FFDEAD"),
    ("Navy", "#000080"),
    ("Old Lace", "#FDF5E6"),
    ("Olive", "#808000"),
    ("Olive Drab", "#6B8E23"),
    ("Orange", "#FFA500"),
    ("Orange Red", "#FF4500"),
    ("Orchid", "#DA70D6"),
    ("Pale Goldenrod", "#EEE8AA"),
    ("Pale Green", "#98FB98"),
    ("Pale Turquoise", "#AFEEEE"),
    ("Pale Violet Red", "#DB7093"),
    ("Papaya Whip", "#FFEFD5"),
    ("Peach Puff", "#FFDAB9"),
    ("Peru", "#CD853F"),
    ("Pink", "#FFC0CB"),
    ("Plum", "#DDA0DD"),
    ("Powder Blue", "#B0E0E6"),
    ("Purple", "#800080"),
    ("Rebecca Purple", "#663399"),
    ("Red", "#FF0000"),
    ("Rosy Brown", "#BC8F8F"),
    ("Royal Blue", "#4169E1"),
    ("Saddle Brown", "#8B4513"),
    ("Salmon", "#FA8072"),
    ("Sandy Brown", "#F4A460"),
    ("Sea Green", "#2E8B57"),
    ("Seashell", "#FFF5EE"),
    ("Sienna", "#A0522D"),
    ("Silver", "#C0C0C0"),
    ("Sky Blue", "#87CEEB"),
    ("Slate Blue", "#6A5ACD"),
    ("Slate Gray", "#708090"),
    ("Snow", "#FFFAFA"),
    ("Spring Green", "#00FF7F"),
    ("Steel Blue", "#4682B4"),
    ("Tan", "#D2B48C"),
    ("Teal", "#008080"),
    ("Thistle", "#D8BFD8"),
    ("Tomato", "#FF6347"),
    ("Turquoise", "#40E0D0"),
    ("Violet", "#EE82EE"),
    ("Wheat", "#F5DEB3"),
    ("White", "#FFFFFF"),
    ("White Smoke", "#F5F5F5"),
    ("Yellow", "#FFFF00"),
    ("Yellow Green", "#9ACD32"),
    // Apparel and trend names
    ("Burgundy", "#800020"),
    ("Wine", "#722F37"),
    ("Oxblood", "#4A0000"),
    ("Claret", "#7F1734"),
    ("Marsala", "#964F4C"),
    ("Mauve", "#E0B0FF"),
    ("Dusty Rose", "#DCAE96"),
    ("Blush", "#DE5D83"),
    ("Rose Gold", "#B76E79"),
    ("Millennial Pink", "#F3CFC6"),
    ("Fuchsia Pink", "#FF77FF"),
    ("Magenta Haze", "#9F4576"),
    ("Raspberry", "#E30B5C"),
    ("Cerise", "#DE3163"),
    ("Cherry Red", "#D2042D"),
    ("Scarlet", "#FF2400"),
    ("Vermilion", "#E34234"),
    ("Brick Red", "#CB4154"),
    ("Rust", "#B7410E"),
    ("Terracotta", "#E2725B"),
    ("Burnt Orange", "#CC5500"),
    ("Pumpkin", "#FF7518"),
    ("Tangerine", "#F28500"),
    ("Apricot", "#FBCEB1"),
    ("Peach", "#FFE5B4"),
    ("Cantaloupe", "#FFA62F"),
    ("Marigold", "#EAA221"),
    ("Mustard", "#FFDB58"),
    ("Saffron", "#F4C430"),
    ("Butter Yellow", "#FFFD74"),
    ("Canary", "#FFEF00"),
    ("Lemon", "#FFF700"),
    ("Champagne", "#F7E7CE"),
    ("Ecru", "#C2B280"),
    ("Camel", "#C19A6B"),
    ("Taupe", "#483C32"),
    ("Mocha", "#967969"),
    ("Espresso", "#4E312D"),
    ("Chestnut", "#954535"),
    ("Cognac", "#9A463D"),
    ("Caramel", "#AF6E4D"),
    ("Toffee", "#755139"),
    ("Mahogany", "#C04000"),
    ("Umber", "#635147"),
    ("Khaki Green", "#8A865D"),
    ("Olive Drab Green", "#6B6B3B"),
    ("Army Green", "#4B5320"),
    ("Moss Green", "#8A9A5B"),
    ("Sage", "#B2AC88"),
    ("Pistachio", "#93C572"),
    ("Mint", "#98FF98"),
    ("Seafoam", "#93E9BE"),
    ("Jade", "#00A86B"),
    ("Emerald", "#50C878"),
    ("Kelly Green", "#4CBB17"),
    ("Hunter Green", "#355E3B"),
    ("Bottle Green", "#006A4E"),
    ("Pine Green", "#01796F"),
    ("Forest", "#0B6623"),
    ("Teal Blue", "#367588"),
    ("Petrol", "#005F6A"),
    ("Peacock", "#33A1C9"),
    ("Cyan Blue", "#1CA9C9"),
    ("Sky", "#76D7EA"),
    ("Baby Blue", "#89CFF0"),
    ("Cornflower", "#9ACEEB"),
    ("Periwinkle", "#CCCCFF"),
    ("Denim", "#1560BD"),
    ("Cobalt", "#0047AB"),
    ("Sapphire", "#0F52BA"),
    ("Ultramarine", "#3F00FF"),
    ("Royal Navy", "#1C2841"),
    ("Ink Blue", "#0B2545"),
    ("Midnight", "#2C3E50"),
    ("Charcoal", "#36454F"),
    ("Graphite", "#474A51"),
    ("Pewter", "#8E9294"),
    ("Stone", "#928E85"),
    ("Dove Gray", "#6D6C6C"),
    ("Heather Gray", "#B6B095"),
    ("Oatmeal", "#E3D9C6"),
    ("Ivory Cream", "#FFFDD0"),
    ("Off White", "#FAF9F6"),
    ("Bone", "#E3DAC9"),
    ("Pearl", "#EAE0C8"),
    ("Lilac", "#C8A2C8"),
    ("Lavender Purple", "#967BB6"),
    ("Amethyst", "#9966CC"),
    ("Violet Purple", "#8F00FF"),
    ("Eggplant", "#614051"),
    ("Aubergine", "#3D0C02"),
    ("Grape", "#6F2DA8"),
    ("Plum Purple", "#580F41"),
    ("Orchid Pink", "#F2BDCD"),
    ("Bubblegum", "#FFC1CC"),
    ("Flamingo", "#FC8EAC"),
    ("Watermelon", "#FC6C85"),
    ("Coral Red", "#FF4040"),
    ("Living Coral", "#FF6F61"),
    ("Salmon Pink", "#FF91A4"),
    ("Neon Green", "#39FF14"),
    ("Electric Blue", "#7DF9FF"),
    ("Neon Pink", "#FF6EC7"),
    ("Hi-Vis Yellow", "#CCFF00"),
];

use std::io::{self, Write};

const GRYFFONDOR_CREST: &str = r"
        /\
       /  \      ~~
      / /\ \    (  )
     /_/  \_\  __\/__
      |    |  /      \
      | ~~ | |  ROAR  |
      |____|  \______/
";

const POUFSOUFFLE_CREST: &str = r"
       .-~~~-.
      /  o o  \
     |   (_)   |
     |  \___/  |
      \_______/
     //       \\
    ((_)     (_))
";

const SERDAIGLE_CREST: &str = r"
         __
        /  \__
       (    @\___
       /         O
      /   (_____/
     /_____/   U
    ^^     ^^
";

const SERPENTARD_CREST: &str = r"
          ____
         / . .\
         \  ---<
          \  /
   ________/ /
  /  _______/
  \______\
";

const UNKNOWN_CREST: &str = r"
       _______
      |       |
      |   ?   |
      |_______|
";

struct HouseBanner {
    crest: &'static str,
    welcome: &'static str,
}

fn banner_for(house: &str) -> HouseBanner {
    match house.to_lowercase().as_str() {
        "gryffondor" => HouseBanner {
            crest: GRYFFONDOR_CREST,
            welcome: "On a vu pire que Gryffondor, tu ne t'en sors pas si mal !",
        },
        "poufsouffle" => HouseBanner {
            crest: POUFSOUFFLE_CREST,
            welcome: "Ils sont gentils les Poufsouffle, c'est déjà quelque chose !",
        },
        "serdaigle" => HouseBanner {
            crest: SERDAIGLE_CREST,
            welcome: "Serdaigle, vraiment ? Et bien... bon courage ?",
        },
        "serpentard" => HouseBanner {
            crest: SERPENTARD_CREST,
            welcome: "Aaah Serpentard ! Welcome my friend !",
        },
        _ => HouseBanner {
            crest: UNKNOWN_CREST,
            welcome: "Une maison bien mystérieuse... fais-en bon usage !",
        },
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub(crate) fn render_opening<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "\n-------------------- La cérémonie de répartition va débuter ! --------------------\n"
    )
}

pub(crate) fn render_verdict<W: Write>(out: &mut W, house: &str) -> io::Result<()> {
    let banner = banner_for(house);

    writeln!(
        out,
        "\n-------------------- Le choix a été fait !  --------------------\n"
    )?;
    writeln!(
        out,
        "\n---------- La maison {} te souhaite la bienvenue ! ----------\n",
        capitalize(house)
    )?;
    writeln!(out, "{}", banner.crest)?;
    writeln!(out, "\n---------- {} ----------\n", banner.welcome)
}

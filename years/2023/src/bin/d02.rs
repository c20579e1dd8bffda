use lib::prelude::*;

/// Limits used unless others are given as arguments.
const DEFAULT_LIMITS: Cubes = Cubes {
    red: 12,
    green: 13,
    blue: 14,
};

#[entry]
fn main(mut input: IStr, opts: &Opts) -> Result<u32> {
    let limits = limits(opts.args())?;
    log::debug!("limits: {limits:?}");

    let mut sum = 0u32;

    while let Some(line) = input.try_line::<IStr>()? {
        let game = parse_game(line)?;
        let possible = game.is_possible(&limits);

        log::debug!(
            "game {}: {:?}: {}",
            game.id,
            game.reveals,
            if possible { "possible" } else { "not possible" }
        );

        if possible {
            sum = sum.checked_add(game.id).context("sum overflow")?;
        }
    }

    Ok(sum)
}

/// Number of cubes of each color.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Cubes {
    red: u32,
    green: u32,
    blue: u32,
}

impl Cubes {
    fn get_mut(&mut self, color: Color) -> &mut u32 {
        match color {
            Color::Red => &mut self.red,
            Color::Green => &mut self.green,
            Color::Blue => &mut self.blue,
        }
    }

    fn fits(&self, limits: &Cubes) -> bool {
        self.red <= limits.red && self.green <= limits.green && self.blue <= limits.blue
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Red,
    Green,
    Blue,
}

lib::from_input! {
    |word: &'static str| -> Color {
        Ok(match word {
            "red" => Color::Red,
            "green" => Color::Green,
            "blue" => Color::Blue,
            other => bail!("unknown color `{other}`"),
        })
    }
}

/// The `Game` word leading each line.
struct Tag;

lib::from_input! {
    |word: &'static str| -> Tag {
        ensure!(word == "Game", "expected `Game`, but got `{word}`");
        Ok(Tag)
    }
}

#[derive(Debug)]
struct Game {
    id: u32,
    reveals: Vec<Cubes>,
}

impl Game {
    /// A game is possible if no reveal shows more cubes than there are.
    fn is_possible(&self, limits: &Cubes) -> bool {
        self.reveals.iter().all(|cubes| cubes.fits(limits))
    }
}

/// Parse a line like `Game 4: 1 red, 3 blue; 6 green`.
fn parse_game(mut line: IStr) -> Result<Game, IStrError> {
    let Split([mut header, mut rest]) = line.next::<Split<':', [IStr; 2]>>()?;
    let (W(Tag), id) = header.next::<(W<Tag>, u32)>()?;
    header.end()?;

    let mut reveals = Vec::new();

    for mut reveal in rest.split(b';') {
        let mut cubes = Cubes::default();

        for mut pull in reveal.split(b',') {
            let (count, W(color)) = pull.next::<(u32, W<Color>)>()?;
            pull.end()?;
            *cubes.get_mut(color) = count;
        }

        reveals.push(cubes);
    }

    Ok(Game { id, reveals })
}

/// Limits are given as `RED GREEN BLUE`.
fn limits(args: &[String]) -> Result<Cubes> {
    let [red, green, blue] = args else {
        ensure!(
            args.is_empty(),
            "expected limits as `RED GREEN BLUE`, but got {} argument(s)",
            args.len()
        );

        return Ok(DEFAULT_LIMITS);
    };

    let parse = |name: &str, value: &str| {
        value
            .parse::<u32>()
            .with_context(|| format!("bad {name} limit `{value}`"))
    };

    Ok(Cubes {
        red: parse("red", red.as_str())?,
        green: parse("green", green.as_str())?,
        blue: parse("blue", blue.as_str())?,
    })
}

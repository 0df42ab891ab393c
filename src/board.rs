use bin::{Bin, Encodable};
use bit_vec::BitVec;
use error::{Error, assert_valid_move};
use primitives::{BoardLocation, Direction, Move, Pos};
use std::convert::TryFrom;
use std::fmt;
use std::ops::{Index, IndexMut};

/// Number of squares along each side of the board.
pub const BOARD_SIZE: usize = 8;
/// Number of squares on the board.
pub const SQUARES: usize = BOARD_SIZE * BOARD_SIZE;
/// Length of an encoded board, three bits per square.
pub const ENCODED_LEN: usize = SQUARES * 3 / 8;
/// Rows filled for each player at the start of a game.
pub const START_ROWS: usize = 3;

/// A checkers game board of 64 squares. Squares are stored column by column, so `board[x]` is the
/// column at `x` and `board[x][y] == board[(x, y)]`. The `false` owner starts on rows 0-2 and
/// the `true` owner on rows 5-7.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
#[serde(try_from = "Vec<BoardLocation>", into = "Vec<BoardLocation>")]
pub struct Board(Vec<BoardLocation>);

/// A validated move, ready to be written to the board.
#[derive(Debug, Clone, Copy)]
struct Play {
    from: Pos,
    to: Pos,
    captured: Option<Pos>,
    promote: bool
}

impl Default for Board {
    fn default() -> Board {
        Board::generate_game_start()
    }
}

impl TryFrom<Vec<BoardLocation>> for Board {
    type Error = Error;

    fn try_from(locations: Vec<BoardLocation>) -> Result<Board, Error> {
        if locations.len() != SQUARES {
            return Err(Error::Shape(locations.len()));
        }
        Ok(Board(locations))
    }
}

impl From<Board> for Vec<BoardLocation> {
    fn from(board: Board) -> Vec<BoardLocation> {
        board.0
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "\n    A B C D E F G H")?;
        writeln!(f, "  -------------------")?;
        for y in (0..BOARD_SIZE).rev() {
            write!(f, "{} |", y + 1)?;
            for x in 0..BOARD_SIZE {
                write!(f, " {}", self[(x, y)])?;
            }
            writeln!(f, " |")?;
        }
        writeln!(f, "  -------------------")
    }
}

impl Index<(usize, usize)> for Board {
    type Output = BoardLocation;

    /// # Panics
    /// If the coordinate is not on the board; use `get` for a checked lookup.
    fn index(&self, (x, y): (usize, usize)) -> &BoardLocation {
        &self.0[Self::xy_to_idx(x, y)]
    }
}

impl IndexMut<(usize, usize)> for Board {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut BoardLocation {
        &mut self.0[Self::xy_to_idx(x, y)]
    }
}

impl Index<usize> for Board {
    type Output = [BoardLocation];

    /// The column of squares at `x`, indexed by `y`.
    fn index(&self, x: usize) -> &[BoardLocation] {
        assert!(x < BOARD_SIZE, "Column {} is not on the board.", x);
        &self.0[(x * BOARD_SIZE)..((x + 1) * BOARD_SIZE)]
    }
}

impl Encodable for Board {
    /// Every square's three bits, in storage order, packed most significant bit first.
    fn to_bytes(&self) -> Bin {
        let mut bits = BitVec::with_capacity(SQUARES * 3);
        for loc in &self.0 {
            bits.push(loc.used);
            bits.push(loc.promoted);
            bits.push(loc.owner);
        }
        bits.to_bytes()
    }

    fn from_bytes(bytes: &[u8]) -> Result<Board, Error> {
        if bytes.len() != ENCODED_LEN {
            return Err(Error::Decode(format!("Expected {} bytes, got {}.", ENCODED_LEN, bytes.len())));
        }

        let bits = BitVec::from_bytes(bytes);
        let locations = (0..SQUARES)
            .map(|i| BoardLocation::new(bits[i * 3], bits[i * 3 + 1], bits[i * 3 + 2]))
            .collect();
        Ok(Board(locations))
    }
}

impl Board {
    /// A board with nothing on it.
    pub fn empty() -> Board {
        Board(vec![BoardLocation::empty(); SQUARES])
    }

    /// Build a board from its squares in storage order.
    /// # Errors
    /// `Shape` if there are not exactly 64 squares.
    pub fn from_locations(locations: Vec<BoardLocation>) -> Result<Board, Error> {
        Board::try_from(locations)
    }

    /// The standard opening position: twelve pieces per player on the squares where `x + y` is
    /// even, filling the three rows closest to each player.
    pub fn generate_game_start() -> Board {
        let mut board = Board::empty();
        for x in 0..BOARD_SIZE {
            for y in 0..BOARD_SIZE {
                if (x + y) % 2 != 0 { continue; }
                if y < START_ROWS {
                    board[(x, y)] = BoardLocation::piece(false);
                } else if y >= BOARD_SIZE - START_ROWS {
                    board[(x, y)] = BoardLocation::piece(true);
                }
            }
        }
        board
    }

    /// Checks if the coordinate is on the board.
    #[inline]
    pub fn on_board(pos: Pos) -> bool {
        let size = BOARD_SIZE as i16;
        pos.0 >= 0 && pos.0 < size && pos.1 >= 0 && pos.1 < size
    }

    /// Look up a square which may not be on the board.
    pub fn get(&self, pos: Pos) -> Result<&BoardLocation, Error> {
        if Self::on_board(pos) { Ok(self.at(pos)) }
        else { Err(Error::Lookup(pos.0, pos.1)) }
    }

    /// Overwrite a square which may not be on the board.
    pub fn set(&mut self, pos: Pos, loc: BoardLocation) -> Result<(), Error> {
        if !Self::on_board(pos) {
            return Err(Error::Lookup(pos.0, pos.1));
        }
        let idx = Self::pos_to_idx(pos);
        self.0[idx] = loc;
        Ok(())
    }

    /// All squares with their coordinates, in storage order.
    pub fn squares<'a>(&'a self) -> impl Iterator<Item=(Pos, BoardLocation)> + 'a {
        self.0.iter().enumerate().map(|(i, loc)| (Self::idx_to_pos(i), *loc))
    }

    /// Number of pieces the given owner has on the board.
    pub fn count_pieces(&self, owner: bool) -> usize {
        self.0.iter().filter(|loc| loc.is_owned_by(owner)).count()
    }

    /// The same board as seen by the other player: every piece changes owner, and empty squares
    /// are copied as they are.
    pub fn translate_to_other_user(&self) -> Board {
        Board(self.0.iter().map(|&loc| {
            if loc.used { BoardLocation { owner: !loc.owner, ..loc } }
            else { loc }
        }).collect())
    }

    /// Make a move for the player whose forward direction is `turn`. If `is_jump`, the piece jumps
    /// over the neighbouring square, which must hold an opposing piece, and that piece is removed.
    /// A piece reaching the far row is promoted.
    /// *Note:* The board will remain unchanged if the move is invalid.
    pub fn apply_move(&mut self, mv: Move, turn: Direction, is_jump: bool) -> Result<(), Error> {
        let play = match self.validate(mv, turn.owner(), turn, is_jump) {
            Ok(play) => play,
            Err(e) => {
                debug!("Rejected move {} for {}: {}", mv, turn, e);
                return Err(e);
            }
        };

        self.commit(play);
        Ok(())
    }

    /// Checks if `apply_move` would accept the move, without changing the board.
    pub fn is_legal(&self, mv: Move, turn: Direction, is_jump: bool) -> bool {
        self.validate(mv, turn.owner(), turn, is_jump).is_ok()
    }

    /// All simple moves available to `owner`, whose unpromoted pieces may only move toward
    /// `forward`. Ordered by square, then x direction, then y direction, `Positive` first.
    pub fn get_possible_moves(&self, forward: Direction, owner: bool) -> Vec<Move> {
        self.collect_moves(forward, owner, false)
    }

    /// All jumps available to `owner`. A player with any jump available must take one.
    pub fn get_required_moves(&self, forward: Direction, owner: bool) -> Vec<Move> {
        self.collect_moves(forward, owner, true)
    }

    /// Checks if the game is over in favour of `owner`, i.e. the other player cannot move, which
    /// includes having no pieces left.
    pub fn check_game_over(&self, owner: bool) -> bool {
        let other = !owner;
        let forward = Direction::for_owner(other);
        self.get_possible_moves(forward, other).is_empty() &&
            self.get_required_moves(forward, other).is_empty()
    }

    fn collect_moves(&self, forward: Direction, owner: bool, is_jump: bool) -> Vec<Move> {
        let mut moves = Vec::new();
        for (pos, loc) in self.squares() {
            if !loc.is_owned_by(owner) { continue; }
            for &dx in Direction::all() {
                for &dy in Direction::all() {
                    let mv = Move::new(pos.0 as u8, pos.1 as u8, dx, dy);
                    if self.validate(mv, owner, forward, is_jump).is_ok() {
                        trace!("Found {} {}", if is_jump { "jump" } else { "move" }, mv);
                        moves.push(mv);
                    }
                }
            }
        }
        moves
    }

    /// Run every rule against the move without touching the board.
    fn validate(&self, mv: Move, owner: bool, forward: Direction, is_jump: bool) -> Result<Play, Error> {
        let from = mv.pos();
        assert_valid_move(Self::on_board(from), "The piece to move is not on the board.")?;

        let piece = *self.at(from);
        assert_valid_move(piece.used, "Cannot move nothing.")?;
        assert_valid_move(piece.owner == owner, "Cannot move the other player's pieces.")?;
        assert_valid_move(piece.promoted || mv.y_direction == forward,
            "Only promoted pieces may move backwards.")?;

        let to = if is_jump { mv.after_double_move_pos() } else { mv.after_move_pos() };
        assert_valid_move(Self::on_board(to), "Cannot move off of the board.")?;

        let captured = if is_jump {
            let over = mv.after_move_pos();
            assert_valid_move(self.at(over).is_owned_by(!owner), "Must jump over an opponent's piece.")?;
            Some(over)
        } else { None };
        assert_valid_move(!self.at(to).used, "Must land on an empty square.")?;

        Ok(Play { from, to, captured, promote: to.1 == forward.far_row() })
    }

    fn commit(&mut self, play: Play) {
        let mut piece = *self.at(play.from);
        if play.promote && !piece.promoted {
            debug!("Promoting piece at {:?}", play.to);
            piece = piece.promote();
        }

        if let Some(over) = play.captured {
            debug!("Capturing piece at {:?}", over);
            self.0[Self::pos_to_idx(over)] = BoardLocation::empty();
        }

        debug!("Moving piece {:?} -> {:?}", play.from, play.to);
        self.0[Self::pos_to_idx(play.from)] = BoardLocation::empty();
        self.0[Self::pos_to_idx(play.to)] = piece;
    }

    /// Square at a coordinate already known to be on the board.
    #[inline]
    fn at(&self, pos: Pos) -> &BoardLocation {
        &self.0[Self::pos_to_idx(pos)]
    }

    #[inline]
    fn pos_to_idx(pos: Pos) -> usize {
        Self::xy_to_idx(pos.0 as usize, pos.1 as usize)
    }

    /// Convert an index to (x, y)
    #[inline]
    fn idx_to_pos(idx: usize) -> Pos {
        ((idx / BOARD_SIZE) as i16, (idx % BOARD_SIZE) as i16)
    }

    /// Convert (x, y) to an index
    #[inline]
    fn xy_to_idx(x: usize, y: usize) -> usize {
        assert!(x < BOARD_SIZE && y < BOARD_SIZE, "({}, {}) is not on the board.", x, y);
        x * BOARD_SIZE + y
    }
}

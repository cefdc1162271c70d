//! Property tests for shuffling and card conservation.

use highcard::{Card, DECK_SIZE, Deck, DiscardPile, Player};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn sorted(cards: &[Card]) -> Vec<String> {
    let mut names: Vec<String> = cards.iter().map(ToString::to_string).collect();
    names.sort();
    names
}

#[derive(Debug, Clone, Copy)]
enum Move {
    Draw,
    Discard(usize),
    Return(usize),
    Recycle,
    AddFromPile(usize),
}

fn any_move() -> impl Strategy<Value = Move> {
    prop_oneof![
        3 => Just(Move::Draw),
        2 => any::<usize>().prop_map(Move::Discard),
        1 => any::<usize>().prop_map(Move::Return),
        1 => Just(Move::Recycle),
        1 => any::<usize>().prop_map(Move::AddFromPile),
    ]
}

proptest! {
    #[test]
    fn shuffle_is_a_permutation(seed in any::<u64>(), len in 1_usize..=DECK_SIZE) {
        let mut deck = Deck::from_cards(Deck::new().cards()[..len].to_vec());
        let before = sorted(deck.cards());

        deck.shuffle(&mut ChaCha8Rng::seed_from_u64(seed)).unwrap();

        prop_assert_eq!(deck.len(), len);
        prop_assert_eq!(sorted(deck.cards()), before);
    }

    #[test]
    fn same_seed_same_order(seed in any::<u64>()) {
        let mut a = Deck::new();
        let mut b = Deck::new();
        a.shuffle(&mut ChaCha8Rng::seed_from_u64(seed)).unwrap();
        b.shuffle(&mut ChaCha8Rng::seed_from_u64(seed)).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn cards_are_conserved(
        seed in any::<u64>(),
        moves in prop::collection::vec(any_move(), 0..120)
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::new();
        let mut pile = DiscardPile::new();
        let mut player = Player::new("Ada", None).unwrap();

        for mv in moves {
            match mv {
                Move::Draw => {
                    let drawn = player.draw(&mut deck);
                    prop_assert!(drawn || deck.is_empty());
                }
                Move::Discard(i) => {
                    if let Some(card) = pick(player.hand().cards(), i) {
                        prop_assert!(player.discard_card(&card, &mut pile));
                    }
                }
                Move::Return(i) => {
                    if let Some(card) = pick(player.hand().cards(), i) {
                        prop_assert!(player.return_card(&card, &mut deck));
                    }
                }
                Move::Recycle => {
                    let spent = pile.remove_all();
                    if !(deck.is_empty() && spent.is_empty()) {
                        deck.reshuffle(spent, &mut rng).unwrap();
                    }
                }
                Move::AddFromPile(i) => {
                    if let Some(card) = pick(pile.cards(), i) {
                        let card = pile.remove_card(&card).unwrap();
                        deck.add_card(card);
                    }
                }
            }
            prop_assert_eq!(deck.len() + player.hand().len() + pile.len(), DECK_SIZE);
        }
    }
}

fn pick(cards: &[Card], i: usize) -> Option<Card> {
    if cards.is_empty() {
        None
    } else {
        Some(cards[i % cards.len()].clone())
    }
}

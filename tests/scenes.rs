mod common;

use common::{AudioEvent, Drawn, RecordingCanvas, context, fixed_day};
use snake_arcade::audio::{Music, Sound};
use snake_arcade::highscore::HighscoreEntry;
use snake_arcade::scene::{
    CRASH_DELAY_MS, CREDITS_MS, GameScene, GameState, MenuOption, TRANSITION_MS,
};
use snake_arcade::{
    Apple, Cell, Direction, GameContext, Grid, InputFrame, Key, Next, SceneKind, SceneMachine,
    SceneRequest, Segment, Snake,
};

fn snake(grid: Grid, cells: &[(i32, i32)], direction: Direction) -> Snake {
    Snake::from_segments(
        grid,
        cells
            .iter()
            .map(|&(x, y)| Segment::new(Cell::new(x, y), direction)),
        direction,
    )
    .expect("at least two segments")
}

/// Machine whose active scene is a game with a fixed snake and apple.
fn game_machine(ctx: &mut GameContext, snake: Snake, apple: Option<Apple>) -> SceneMachine {
    let mut machine = SceneMachine::new(ctx, SceneRequest::Game);
    let scene = GameScene::with_entities(ctx, snake, apple);
    match machine.active_mut().kind_mut() {
        SceneKind::Game(game) => *game = scene,
        _ => unreachable!("just built a game scene"),
    }
    machine
}

fn game(machine: &SceneMachine) -> &GameScene {
    match machine.active().kind() {
        SceneKind::Game(game) => game,
        _ => panic!("expected game, found {}", machine.active().name()),
    }
}

fn idle() -> InputFrame {
    InputFrame::default()
}

#[test]
fn snake_runs_straight_across_the_board() {
    let (mut ctx, _audio) = context(1);
    let grid = ctx.grid;
    let apple = Some(Apple::at(Cell::new(10, 10)));
    let body = snake(grid, &[(0, 0), (24, 0)], Direction::Right);
    let mut machine = game_machine(&mut ctx, body, apple);
    let mut canvas = RecordingCanvas::default();

    assert!(machine.frame(&mut ctx, &InputFrame::pressed([Key::Right]), 0, &mut canvas));
    for now in [100, 200, 300, 400, 500] {
        assert!(machine.frame(&mut ctx, &idle(), now, &mut canvas));
    }

    let scene = game(&machine);
    assert_eq!(scene.snake().head(), Cell::new(5, 0));
    assert_eq!(scene.snake().len(), 2);
    assert_eq!(scene.state(), GameState::Running);
    assert_eq!(
        canvas.drawn.last(),
        Some(&Drawn::Board {
            head: Cell::new(5, 0),
            apple: Some(Cell::new(10, 10)),
        })
    );
}

#[test]
fn eating_grows_on_the_next_step_and_respawns_the_apple() {
    let (mut ctx, audio) = context(2);
    let grid = ctx.grid;
    let mut machine = game_machine(
        &mut ctx,
        snake(grid, &[(3, 3), (2, 3)], Direction::Right),
        Some(Apple::at(Cell::new(4, 3))),
    );
    let mut canvas = RecordingCanvas::default();

    machine.frame(&mut ctx, &idle(), 100, &mut canvas);
    {
        let scene = game(&machine);
        assert_eq!(scene.snake().len(), 2);
        assert!(scene.snake().is_growing());
        assert_eq!(scene.snake().score(), 1);
        let apple = scene.apple().expect("respawned").position();
        assert!(scene.snake().cells().all(|c| c != apple));
    }
    assert_eq!(audio.played(Sound::Eat), 1);

    machine.frame(&mut ctx, &idle(), 200, &mut canvas);
    let scene = game(&machine);
    assert_eq!(scene.snake().len(), 3);
    assert_eq!(scene.snake().score() as usize, audio.played(Sound::Eat));
}

#[test]
fn crash_leads_to_game_over_after_the_delay() {
    let (mut ctx, audio) = context(3);
    let grid = ctx.grid;
    let body = snake(grid, &[(1, 1), (2, 1), (2, 2), (1, 2), (0, 2)], Direction::Down);
    let mut machine = game_machine(&mut ctx, body, Some(Apple::at(Cell::new(20, 15))));
    let mut canvas = RecordingCanvas::default();

    machine.frame(&mut ctx, &idle(), 100, &mut canvas);
    assert_eq!(game(&machine).state(), GameState::Crashed { at: 100 });
    assert_eq!(audio.played(Sound::Crash), 1);
    assert_eq!(audio.events().last(), Some(&AudioEvent::StopMusic));
    assert!(matches!(canvas.take().as_slice(), [Drawn::Board { .. }]));

    // input is ignored once crashed
    machine.frame(&mut ctx, &InputFrame::pressed([Key::Escape]), 200, &mut canvas);
    assert_eq!(canvas.take(), vec![Drawn::Crash(Cell::new(1, 2))]);
    assert_eq!(machine.active().name(), "game");

    machine.frame(&mut ctx, &idle(), 100 + CRASH_DELAY_MS, &mut canvas);
    assert_eq!(machine.active().name(), "game");

    machine.frame(&mut ctx, &idle(), 101 + CRASH_DELAY_MS, &mut canvas);
    match machine.active().kind() {
        SceneKind::GameOver(over) => {
            assert_eq!(over.score(), 3);
            assert!(over.is_record());
            assert!(!over.pun().is_empty());
        }
        _ => panic!("expected game over, found {}", machine.active().name()),
    }
}

#[test]
fn pause_freezes_the_snake_and_draws_the_banner_once() {
    let (mut ctx, audio) = context(4);
    let grid = ctx.grid;
    let mut machine = game_machine(
        &mut ctx,
        snake(grid, &[(5, 5), (4, 5)], Direction::Right),
        Some(Apple::at(Cell::new(0, 19))),
    );
    let mut canvas = RecordingCanvas::default();

    machine.frame(&mut ctx, &InputFrame::typed("p"), 100, &mut canvas);
    assert_eq!(game(&machine).state(), GameState::Paused);
    assert_eq!(canvas.take(), vec![Drawn::Pause(0)]);
    assert!(audio.events().contains(&AudioEvent::PauseMusic));

    machine.frame(&mut ctx, &InputFrame::pressed([Key::Up]), 500, &mut canvas);
    assert!(canvas.take().is_empty());
    let scene = game(&machine);
    assert_eq!(scene.snake().head(), Cell::new(5, 5));
    assert!(scene.snake().pending().is_empty());

    machine.frame(&mut ctx, &InputFrame::typed("p"), 600, &mut canvas);
    assert_eq!(game(&machine).state(), GameState::Running);
    assert_eq!(game(&machine).snake().head(), Cell::new(6, 5));
    assert!(audio.events().contains(&AudioEvent::ResumeMusic));

    // pausing again repaints the banner exactly once
    canvas.take();
    machine.frame(&mut ctx, &InputFrame::typed("p"), 650, &mut canvas);
    machine.frame(&mut ctx, &idle(), 660, &mut canvas);
    assert_eq!(canvas.take(), vec![Drawn::Pause(0)]);
}

#[test]
fn grid_key_toggles_the_grid_lines() {
    let (mut ctx, _audio) = context(5);
    let grid = ctx.grid;
    let mut machine = game_machine(
        &mut ctx,
        snake(grid, &[(5, 5), (4, 5)], Direction::Right),
        Some(Apple::at(Cell::new(0, 19))),
    );
    let mut canvas = RecordingCanvas::default();

    machine.frame(&mut ctx, &InputFrame::typed("g"), 50, &mut canvas);
    assert!(game(&machine).show_grid());
    machine.frame(&mut ctx, &InputFrame::typed("G"), 60, &mut canvas);
    assert!(!game(&machine).show_grid());
}

#[test]
fn escape_leaves_the_game_for_the_menu() {
    let (mut ctx, audio) = context(6);
    let mut machine = SceneMachine::new(&mut ctx, SceneRequest::Game);
    let mut canvas = RecordingCanvas::default();

    assert!(machine.frame(&mut ctx, &InputFrame::pressed([Key::Escape]), 10, &mut canvas));
    assert_eq!(machine.active().name(), "menu");
    let events = audio.events();
    let stop = events.iter().rposition(|e| *e == AudioEvent::StopMusic);
    let menu = events.iter().rposition(|e| *e == AudioEvent::Music(Music::Menu));
    assert!(stop < menu);
}

#[test]
fn board_without_room_for_an_apple_ends_the_game() {
    let audio = common::RecordingAudio::default();
    let mut ctx = GameContext::headless(Grid::new(3, 1), 7)
        .with_audio(Box::new(audio.clone()))
        .with_calendar(fixed_day);
    let grid = ctx.grid;
    let mut machine = game_machine(
        &mut ctx,
        snake(grid, &[(1, 0), (0, 0)], Direction::Right),
        Some(Apple::at(Cell::new(2, 0))),
    );
    let mut canvas = RecordingCanvas::default();

    machine.frame(&mut ctx, &idle(), 100, &mut canvas);
    assert_eq!(game(&machine).apple().map(Apple::position), Some(Cell::new(0, 0)));
    machine.frame(&mut ctx, &idle(), 200, &mut canvas);
    assert!(game(&machine).apple().is_none());

    machine.frame(&mut ctx, &idle(), 300, &mut canvas);
    assert_eq!(game(&machine).state(), GameState::Cleared { at: 300 });
    let eaten = audio.played(Sound::Eat) as u32;
    assert_eq!(eaten, 2);

    machine.frame(&mut ctx, &idle(), 301 + CRASH_DELAY_MS, &mut canvas);
    match machine.active().kind() {
        // the last apple counts even though the body never grew for it
        SceneKind::GameOver(over) => assert_eq!(over.score(), eaten),
        _ => panic!("expected game over, found {}", machine.active().name()),
    }
}

#[test]
fn record_initials_are_saved_with_todays_date() {
    let (mut ctx, _audio) = context(8);
    let mut machine = SceneMachine::new(&mut ctx, SceneRequest::GameOver { score: 7 });
    let mut canvas = RecordingCanvas::default();

    machine.frame(&mut ctx, &InputFrame::typed("ab-1x"), 0, &mut canvas);
    machine.frame(&mut ctx, &InputFrame::pressed([Key::Backspace]), 10, &mut canvas);
    assert_eq!(
        canvas.drawn.last(),
        Some(&Drawn::GameOver {
            score: 7,
            record: true,
            initials: "AB".to_owned(),
        })
    );

    machine.frame(&mut ctx, &InputFrame::pressed([Key::Return]), 20, &mut canvas);
    assert_eq!(machine.active().name(), "game_over");
    assert_eq!(
        ctx.store.highscores().entries(),
        &[HighscoreEntry::new("AB", 7, fixed_day())]
    );
    match machine.active().kind() {
        SceneKind::GameOver(over) => assert!(!over.is_record()),
        _ => unreachable!(),
    }

    machine.frame(&mut ctx, &InputFrame::pressed([Key::Return]), 30, &mut canvas);
    assert_eq!(machine.active().name(), "game");
}

#[test]
fn score_below_a_full_table_is_not_a_record() {
    let (mut ctx, _audio) = context(9);
    for name in ["AAA", "BBB", "CCC", "DDD", "EEE"] {
        ctx.store
            .highscores_mut()
            .insert(HighscoreEntry::new(name, 10, fixed_day()));
    }
    let mut machine = SceneMachine::new(&mut ctx, SceneRequest::GameOver { score: 10 });
    let mut canvas = RecordingCanvas::default();

    machine.frame(&mut ctx, &InputFrame::typed("z"), 0, &mut canvas);
    match machine.active().kind() {
        SceneKind::GameOver(over) => {
            assert!(!over.is_record());
            assert_eq!(over.initials(), "");
        }
        _ => panic!("expected game over, found {}", machine.active().name()),
    }

    machine.frame(&mut ctx, &InputFrame::typed("p"), 10, &mut canvas);
    assert_eq!(machine.active().name(), "menu");
    assert_eq!(ctx.store.highscores().len(), 5);
}

#[test]
fn menu_wraps_around_and_plays_the_select_sound() {
    let (mut ctx, audio) = context(10);
    let mut machine = SceneMachine::new(&mut ctx, SceneRequest::Menu);
    let mut canvas = RecordingCanvas::default();

    let highlighted = |machine: &SceneMachine| match machine.active().kind() {
        SceneKind::Menu(menu) => menu.highlighted(),
        _ => panic!("expected menu"),
    };

    machine.frame(&mut ctx, &InputFrame::pressed([Key::Up]), 0, &mut canvas);
    assert_eq!(highlighted(&machine), MenuOption::Quit);
    machine.frame(&mut ctx, &InputFrame::pressed([Key::Down, Key::Down]), 10, &mut canvas);
    assert_eq!(highlighted(&machine), MenuOption::Settings);
    assert_eq!(audio.played(Sound::MenuSelect), 3);
    assert_eq!(canvas.drawn.last(), Some(&Drawn::Menu(1)));
}

#[test]
fn menu_waits_for_the_accept_sound_before_switching() {
    let (mut ctx, audio) = context(11);
    let mut machine = SceneMachine::new(&mut ctx, SceneRequest::Menu);
    let mut canvas = RecordingCanvas::default();

    *audio.busy.borrow_mut() = true;
    machine.frame(&mut ctx, &InputFrame::pressed([Key::Return]), 0, &mut canvas);
    assert_eq!(audio.played(Sound::MenuAccept), 1);
    machine.frame(&mut ctx, &InputFrame::pressed([Key::Down]), 10, &mut canvas);
    assert_eq!(machine.active().name(), "menu");
    match machine.active().kind() {
        SceneKind::Menu(menu) => {
            assert!(menu.is_selected());
            assert_eq!(menu.highlighted(), MenuOption::Play);
        }
        _ => unreachable!(),
    }

    *audio.busy.borrow_mut() = false;
    machine.frame(&mut ctx, &idle(), 20, &mut canvas);
    match machine.active().kind() {
        SceneKind::Transition(fade) => assert_eq!(fade.target(), &SceneRequest::Game),
        _ => panic!("expected transition, found {}", machine.active().name()),
    }
}

#[test]
fn transition_hands_over_after_the_fade() {
    let (mut ctx, _audio) = context(12);
    let mut machine = SceneMachine::new(&mut ctx, SceneRequest::fade_to(SceneRequest::Highscores));
    let mut canvas = RecordingCanvas::default();

    machine.frame(&mut ctx, &idle(), 1000, &mut canvas);
    machine.frame(&mut ctx, &idle(), 1000 + TRANSITION_MS, &mut canvas);
    assert_eq!(machine.active().name(), "transition");
    assert!(canvas.take().iter().all(|d| *d == Drawn::Fade));

    machine.frame(&mut ctx, &idle(), 1001 + TRANSITION_MS, &mut canvas);
    assert_eq!(machine.active().name(), "highscores");
}

#[test]
fn quitting_shows_credits_then_terminates() {
    let (mut ctx, _audio) = context(13);
    let mut machine = SceneMachine::new(&mut ctx, SceneRequest::Menu);
    let mut canvas = RecordingCanvas::default();

    assert!(machine.frame(&mut ctx, &InputFrame::pressed([Key::Escape]), 0, &mut canvas));
    assert_eq!(machine.active().name(), "exit");

    assert!(machine.frame(&mut ctx, &idle(), 500, &mut canvas));
    assert!(machine.frame(&mut ctx, &idle(), 499 + CREDITS_MS, &mut canvas));
    assert_eq!(canvas.drawn.last(), Some(&Drawn::Credits));
    assert!(!machine.frame(&mut ctx, &idle(), 500 + CREDITS_MS, &mut canvas));
    assert!(!machine.advance(&mut ctx));
    assert_eq!(machine.active().next(), &Next::Terminate);
}

#[test]
fn switching_builds_a_fresh_scene() {
    let (mut ctx, audio) = context(14);
    let mut machine = SceneMachine::new(&mut ctx, SceneRequest::Highscores);
    let first = machine.active().id();

    assert!(machine.advance(&mut ctx));
    assert_eq!(machine.active().id(), first);

    machine
        .active_mut()
        .switch_to_scene(&mut ctx, Some(SceneRequest::Settings));
    assert_eq!(audio.events().last(), Some(&AudioEvent::StopMusic));
    assert!(machine.advance(&mut ctx));
    assert_eq!(machine.active().name(), "settings");
    assert_ne!(machine.active().id(), first);

    machine.active_mut().switch_to_scene(&mut ctx, None);
    assert!(!machine.advance(&mut ctx));
}

#[test]
fn highscores_list_returns_to_the_menu() {
    let (mut ctx, _audio) = context(15);
    ctx.store
        .highscores_mut()
        .insert(HighscoreEntry::new("ZED", 4, fixed_day()));
    let mut machine = SceneMachine::new(&mut ctx, SceneRequest::Highscores);
    let mut canvas = RecordingCanvas::default();

    machine.frame(&mut ctx, &idle(), 0, &mut canvas);
    assert_eq!(canvas.take(), vec![Drawn::Highscores(1)]);
    machine.frame(&mut ctx, &InputFrame::pressed([Key::Return]), 10, &mut canvas);
    assert_eq!(machine.active().name(), "menu");
}

#[test]
fn settings_adjust_volumes_and_toggle_the_classic_look() {
    let (mut ctx, audio) = context(16);
    let mut machine = SceneMachine::new(&mut ctx, SceneRequest::Settings);
    let mut canvas = RecordingCanvas::default();

    machine.frame(&mut ctx, &InputFrame::pressed([Key::Right, Key::Left]), 0, &mut canvas);
    assert_eq!(ctx.store.settings().sound, 0.95);

    machine.frame(
        &mut ctx,
        &InputFrame::pressed([Key::Down, Key::Left, Key::Left]),
        10,
        &mut canvas,
    );
    assert_eq!(ctx.store.settings().music, 0.7);

    machine.frame(&mut ctx, &InputFrame::pressed([Key::Down, Key::Return]), 20, &mut canvas);
    assert!(ctx.store.settings().classic);
    assert_eq!(audio.played(Sound::MenuSelect), 7);

    machine.frame(&mut ctx, &InputFrame::pressed([Key::Escape]), 30, &mut canvas);
    assert_eq!(machine.active().name(), "menu");
}

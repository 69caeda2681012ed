//! World event dispatch to a client.

use std::sync::Arc;

use tracing::trace;

use mc_sync_proto::metadata::EntityMetadata;
use mc_sync_proto::packets::level_sound_event::{SOUND_BREAK, SOUND_PLACE};
use mc_sync_proto::packets::{
    AddActor, AddPlayer, Animate, ChangeDimension, EntityEvent, GamePacket, LevelEvent,
    LevelSoundEvent, MobEquipment, MoveActorAbsolute, MovePlayer, RemoveEntity, SetActorData,
    SetTime, UpdateBlock,
};
use mc_sync_proto::types::{BlockPos, ChunkPos, Vec3};
use mc_sync_world::block::Block;
use mc_sync_world::chunk::ChunkColumn;

use crate::entity::Entity;
use crate::event::{Dimension, EntityAction, EntityState, Particle, Sound};
use crate::session::Session;

/// Sink for world events destined for one client.
///
/// Calls never fail and never block. Events about the viewer's own entity
/// are suppressed except where noted, since the client predicts them.
pub trait Viewer: Send + Sync {
    fn view_entity(&self, entity: &Arc<dyn Entity>);
    fn hide_entity(&self, entity: &dyn Entity);
    fn view_entity_movement(
        &self,
        entity: &dyn Entity,
        delta_pos: Vec3,
        delta_yaw: f32,
        delta_pitch: f32,
    );
    /// Teleporting the viewer's own entity recentres its chunk loader.
    fn view_entity_teleport(&self, entity: &dyn Entity, position: Vec3);
    fn view_entity_items(&self, entity: &dyn Entity);
    fn view_particle(&self, pos: Vec3, particle: &Particle);
    fn view_sound(&self, pos: Vec3, sound: &Sound);
    fn view_block_update(&self, pos: BlockPos, block: &Block);
    fn view_entity_action(&self, entity: &dyn Entity, action: EntityAction);
    /// Applies to the viewer's own entity as well.
    fn view_entity_state(&self, entity: &dyn Entity, states: &[EntityState]);
    fn view_chunk(&self, pos: ChunkPos, column: &ChunkColumn);
    fn view_time(&self, time: i32);
    fn send_dimension(&self, dimension: Dimension);
}

impl Session {
    /// Runtime ID of a visible entity other than the viewer itself.
    fn other_runtime_id(&self, entity: &dyn Entity) -> Option<u64> {
        if self.registry.is_self(entity) {
            return None;
        }
        self.registry.lookup(entity.entity_id())
    }

    fn particle_packet(&self, pos: Vec3, particle: &Particle) -> Option<GamePacket> {
        let packet = match particle {
            Particle::BlockBreak { block } => {
                LevelEvent::destroy_block(pos, self.network_ids.block_runtime_id(block))
            }
            Particle::PunchBlock { block, face } => {
                LevelEvent::punch_block(pos, self.network_ids.block_runtime_id(block), *face)
            }
            Particle::Dust { .. } => return None,
        };
        Some(packet.into())
    }

    fn sound_packet(&self, pos: Vec3, sound: &Sound) -> Option<GamePacket> {
        let packet: GamePacket = match sound {
            Sound::BlockPlace { block } => LevelSoundEvent::block(
                SOUND_PLACE,
                pos,
                self.network_ids.block_runtime_id(block),
            )
            .into(),
            Sound::BlockBreak { block } => LevelSoundEvent::block(
                SOUND_BREAK,
                pos,
                self.network_ids.block_runtime_id(block),
            )
            .into(),
            Sound::Click => LevelEvent::click(pos).into(),
            Sound::Note { .. } => return None,
        };
        Some(packet)
    }
}

impl Viewer for Session {
    fn view_entity(&self, entity: &Arc<dyn Entity>) {
        if self.registry.is_self(entity.as_ref()) {
            return;
        }
        let runtime_id = self.registry.assign_or_reuse(entity);
        let (position, pitch, yaw) = (entity.position(), entity.pitch(), entity.yaw());

        match entity.controllable() {
            Some(player) => self.write_packet(AddPlayer::new(
                player.uuid(),
                player.name(),
                runtime_id,
                position,
                pitch,
                yaw,
            )),
            None => self.write_packet(AddActor::new(
                entity.entity_type(),
                runtime_id,
                position,
                pitch,
                yaw,
            )),
        }
    }

    fn hide_entity(&self, entity: &dyn Entity) {
        let Some(runtime_id) = self.registry.release(entity) else {
            return;
        };
        self.write_packet(RemoveEntity {
            entity_unique_id: runtime_id as i64,
        });
    }

    fn view_entity_movement(
        &self,
        entity: &dyn Entity,
        delta_pos: Vec3,
        delta_yaw: f32,
        delta_pitch: f32,
    ) {
        let Some(runtime_id) = self.other_runtime_id(entity) else {
            return;
        };
        let position = entity.position() + delta_pos;
        let pitch = entity.pitch() + delta_pitch;
        let yaw = entity.yaw() + delta_yaw;

        if entity.controllable().is_some() {
            self.write_packet(MovePlayer::normal(runtime_id, position, pitch, yaw));
        } else {
            self.write_packet(MoveActorAbsolute::normal(runtime_id, position, pitch, yaw));
        }
    }

    fn view_entity_teleport(&self, entity: &dyn Entity, position: Vec3) {
        if self.registry.is_self(entity) {
            self.chunk_loader().move_to(position);
            return;
        }
        let Some(runtime_id) = self.registry.lookup(entity.entity_id()) else {
            return;
        };
        let (pitch, yaw) = (entity.pitch(), entity.yaw());

        if entity.controllable().is_some() {
            self.write_packet(MovePlayer::teleport(runtime_id, position, pitch, yaw));
        } else {
            self.write_packet(MoveActorAbsolute::teleport(runtime_id, position, pitch, yaw));
        }
    }

    fn view_entity_items(&self, entity: &dyn Entity) {
        let Some(carrier) = entity.item_carrier() else {
            return;
        };
        let Some(runtime_id) = self.other_runtime_id(entity) else {
            return;
        };
        let (main_hand, off_hand) = carrier.held_items();

        self.write_packet(MobEquipment::main_hand(
            runtime_id,
            self.network_ids.network_item(&main_hand),
        ));
        self.write_packet(MobEquipment::off_hand(
            runtime_id,
            self.network_ids.network_item(&off_hand),
        ));
    }

    fn view_particle(&self, pos: Vec3, particle: &Particle) {
        match self.particle_packet(pos, particle) {
            Some(packet) => self.write_packet(packet),
            None => trace!("No network form for particle {particle:?}"),
        }
    }

    fn view_sound(&self, pos: Vec3, sound: &Sound) {
        match self.sound_packet(pos, sound) {
            Some(packet) => self.write_packet(packet),
            None => trace!("No network form for sound {sound:?}"),
        }
    }

    fn view_block_update(&self, pos: BlockPos, block: &Block) {
        self.write_packet(UpdateBlock::new(
            pos,
            self.network_ids.block_runtime_id(block),
        ));
    }

    fn view_entity_action(&self, entity: &dyn Entity, action: EntityAction) {
        let Some(runtime_id) = self.registry.lookup(entity.entity_id()) else {
            return;
        };
        match action {
            EntityAction::SwingArm if entity.controllable().is_some() => {
                self.write_packet(Animate::swing_arm(runtime_id))
            }
            EntityAction::SwingArm => self.write_packet(EntityEvent::arm_swing(runtime_id)),
            EntityAction::Hurt => self.write_packet(EntityEvent::hurt(runtime_id)),
            EntityAction::Death => self.write_packet(EntityEvent::death(runtime_id)),
        }
    }

    fn view_entity_state(&self, entity: &dyn Entity, states: &[EntityState]) {
        let Some(runtime_id) = self.registry.lookup(entity.entity_id()) else {
            trace!("State update for unseen entity {}", entity.entity_id());
            return;
        };
        let mut metadata = EntityMetadata::default_entity();
        for state in states {
            metadata.set_flag(state.flag());
        }
        self.write_packet(SetActorData {
            entity_runtime_id: runtime_id,
            metadata,
            tick: 0,
        });
    }

    fn view_chunk(&self, pos: ChunkPos, column: &ChunkColumn) {
        let packet = self
            .chunk_encoder
            .encode(pos, self.config.dimension, column);
        self.write_packet(packet);
    }

    fn view_time(&self, time: i32) {
        self.write_packet(SetTime { time });
    }

    fn send_dimension(&self, dimension: Dimension) {
        self.write_packet(ChangeDimension::to(dimension.network_id()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::SELF_RUNTIME_ID;
    use crate::test_support::{Fixture, LoaderCall, MockEntity, MockPlayer};
    use mc_sync_proto::metadata::flag;
    use mc_sync_proto::packets::change_dimension::DIMENSION_NETHER;
    use mc_sync_proto::packets::entity_event::{EVENT_ARM_SWING, EVENT_DEATH, EVENT_HURT};
    use mc_sync_proto::packets::level_event::{PARTICLE_DESTROY, PARTICLE_PUNCH_BLOCK, SOUND_CLICK};
    use mc_sync_proto::packets::mob_equipment::{WINDOW_INVENTORY, WINDOW_OFF_HAND};
    use mc_sync_proto::packets::update_block::FLAG_NETWORK;
    use mc_sync_proto::packets::MoveMode;
    use mc_sync_world::chunk::SubChunk;
    use mc_sync_world::ids::NetworkIds;
    use mc_sync_world::item::ItemStack;

    fn pig(n: u64) -> Arc<dyn Entity> {
        Arc::new(MockEntity::new(n, "minecraft:pig").at(Vec3::new(1.0, 64.0, 2.0)))
    }

    fn player(n: u64, name: &str) -> Arc<dyn Entity> {
        Arc::new(MockPlayer::new(n, name).at(Vec3::new(5.0, 70.0, 5.0)))
    }

    #[test]
    fn controllable_is_added_as_player() {
        let mut fx = Fixture::new();
        let alex = player(7, "Alex");
        fx.session.view_entity(&alex);

        match fx.drain().as_slice() {
            [GamePacket::AddPlayer(p)] => {
                assert_eq!(p.username, "Alex");
                assert_eq!(p.entity_runtime_id, 1);
                assert_eq!(p.entity_unique_id, 1);
                assert_eq!(p.position, Vec3::new(5.0, 70.0, 5.0));
                assert_eq!(p.head_yaw, p.yaw);
            }
            other => panic!("unexpected packets: {other:?}"),
        }
    }

    #[test]
    fn other_entities_are_added_as_actors() {
        let mut fx = Fixture::new();
        fx.session.view_entity(&pig(3));

        match fx.drain().as_slice() {
            [GamePacket::AddActor(p)] => {
                assert_eq!(p.entity_type, "minecraft:pig");
                assert_eq!(p.entity_runtime_id, 1);
            }
            other => panic!("unexpected packets: {other:?}"),
        }
    }

    #[test]
    fn self_entity_gets_no_packets() {
        let mut fx = Fixture::new();
        let me: Arc<dyn Entity> = fx.actor.clone();

        fx.session.view_entity(&me);
        fx.session
            .view_entity_movement(me.as_ref(), Vec3::new(1.0, 0.0, 0.0), 5.0, 0.0);
        fx.session
            .view_entity_teleport(me.as_ref(), Vec3::new(100.0, 80.0, 100.0));
        fx.session.view_entity_items(me.as_ref());
        fx.session.hide_entity(me.as_ref());

        assert!(fx.drain().is_empty());
        assert!(fx.session.registry().is_empty());
        assert_eq!(
            fx.loader.calls(),
            vec![LoaderCall::MoveTo(Vec3::new(100.0, 80.0, 100.0))]
        );
    }

    #[test]
    fn hide_sends_remove_with_assigned_id() {
        let mut fx = Fixture::new();
        let a = pig(1);
        let b = pig(2);
        fx.session.view_entity(&a);
        fx.session.view_entity(&b);
        fx.drain();

        fx.session.hide_entity(b.as_ref());
        assert_eq!(
            fx.drain(),
            vec![GamePacket::from(RemoveEntity {
                entity_unique_id: 2
            })]
        );
        // Already hidden
        fx.session.hide_entity(b.as_ref());
        assert!(fx.drain().is_empty());
    }

    #[test]
    fn player_keeps_runtime_id_across_show_hide_show() {
        let mut fx = Fixture::new();
        let alex = player(7, "Alex");
        fx.session.view_entity(&alex);
        fx.session.hide_entity(alex.as_ref());
        fx.session.view_entity(&pig(8));
        fx.session.view_entity(&alex);

        let ids: Vec<u64> = fx
            .drain()
            .into_iter()
            .filter_map(|p| match p {
                GamePacket::AddPlayer(p) => Some(p.entity_runtime_id),
                _ => None,
            })
            .collect();
        assert_eq!(ids, vec![1, 1]);
    }

    #[test]
    fn movement_applies_deltas() {
        let mut fx = Fixture::new();
        let alex = player(7, "Alex");
        let p = pig(3);
        fx.session.view_entity(&alex);
        fx.session.view_entity(&p);
        fx.drain();

        fx.session
            .view_entity_movement(alex.as_ref(), Vec3::new(0.5, 0.0, -0.5), 10.0, 5.0);
        fx.session
            .view_entity_movement(p.as_ref(), Vec3::new(1.0, 1.0, 1.0), 0.0, 0.0);

        match fx.drain().as_slice() {
            [GamePacket::MovePlayer(m), GamePacket::MoveActorAbsolute(a)] => {
                assert_eq!(m.runtime_entity_id, 1);
                assert_eq!(m.mode, MoveMode::Normal);
                assert_eq!(m.position, Vec3::new(5.5, 70.0, 4.5));
                assert_eq!(m.yaw, 10.0);
                assert_eq!(m.pitch, 5.0);
                assert_eq!(a.entity_runtime_id, 2);
                assert_eq!(a.position, Vec3::new(2.0, 65.0, 3.0));
                assert!(!a.is_teleport());
            }
            other => panic!("unexpected packets: {other:?}"),
        }
    }

    #[test]
    fn unseen_entities_are_ignored() {
        let mut fx = Fixture::new();
        let p = pig(3);
        fx.session
            .view_entity_movement(p.as_ref(), Vec3::ZERO, 0.0, 0.0);
        fx.session.view_entity_teleport(p.as_ref(), Vec3::ZERO);
        fx.session.view_entity_action(p.as_ref(), EntityAction::Hurt);
        fx.session
            .view_entity_state(p.as_ref(), &[EntityState::OnFire]);
        assert!(fx.drain().is_empty());
    }

    #[test]
    fn teleport_uses_teleport_forms() {
        let mut fx = Fixture::new();
        let alex = player(7, "Alex");
        let p = pig(3);
        fx.session.view_entity(&alex);
        fx.session.view_entity(&p);
        fx.drain();

        let target = Vec3::new(-20.0, 90.0, 40.0);
        fx.session.view_entity_teleport(alex.as_ref(), target);
        fx.session.view_entity_teleport(p.as_ref(), target);

        match fx.drain().as_slice() {
            [GamePacket::MovePlayer(m), GamePacket::MoveActorAbsolute(a)] => {
                assert_eq!(m.mode, MoveMode::Teleport);
                assert_eq!(m.position, target);
                assert!(a.is_teleport());
                assert_eq!(a.position, target);
            }
            other => panic!("unexpected packets: {other:?}"),
        }
        assert!(fx.loader.calls().is_empty());
    }

    #[test]
    fn held_items_are_sent_main_hand_first() {
        let mut fx = Fixture::new();
        let zombie: Arc<dyn Entity> = Arc::new(MockEntity::new(4, "minecraft:zombie").holding(
            ItemStack::new("minecraft:diamond_sword", 1),
            ItemStack::new("minecraft:unknown_thing", 1),
        ));
        fx.session.view_entity(&zombie);
        fx.drain();

        fx.session.view_entity_items(zombie.as_ref());
        match fx.drain().as_slice() {
            [GamePacket::MobEquipment(main), GamePacket::MobEquipment(off)] => {
                assert_eq!(main.window_id, WINDOW_INVENTORY);
                assert_eq!(main.item.runtime_id, 316);
                assert_eq!(main.item.count, 1);
                assert_eq!(off.window_id, WINDOW_OFF_HAND);
                assert!(off.item.is_empty());
            }
            other => panic!("unexpected packets: {other:?}"),
        }
    }

    #[test]
    fn entities_without_items_send_nothing() {
        let mut fx = Fixture::new();
        let p = pig(3);
        fx.session.view_entity(&p);
        fx.drain();
        fx.session.view_entity_items(p.as_ref());
        assert!(fx.drain().is_empty());
    }

    #[test]
    fn particles_map_to_level_events() {
        let mut fx = Fixture::new();
        let stone = Block::new("minecraft:stone");
        let stone_id = fx.ids.block_runtime_id(&stone);
        let pos = Vec3::new(0.5, 64.5, 0.5);

        fx.session.view_particle(
            pos,
            &Particle::BlockBreak {
                block: stone.clone(),
            },
        );
        fx.session.view_particle(
            pos,
            &Particle::PunchBlock {
                block: stone,
                face: 3,
            },
        );
        fx.session
            .view_particle(pos, &Particle::Dust { colour: [255, 0, 0, 255] });

        match fx.drain().as_slice() {
            [GamePacket::LevelEvent(destroy), GamePacket::LevelEvent(punch)] => {
                assert_eq!(destroy.event_id, PARTICLE_DESTROY);
                assert_eq!(destroy.data, stone_id as i32);
                assert_eq!(punch.event_id, PARTICLE_PUNCH_BLOCK);
                assert_eq!(punch.data, (stone_id | 3 << 24) as i32);
            }
            other => panic!("unexpected packets: {other:?}"),
        }
    }

    #[test]
    fn sounds_map_to_sound_packets() {
        let mut fx = Fixture::new();
        let dirt = Block::new("minecraft:dirt");
        let dirt_id = fx.ids.block_runtime_id(&dirt);
        let pos = Vec3::new(3.5, 64.5, 3.5);

        fx.session
            .view_sound(pos, &Sound::BlockPlace { block: dirt.clone() });
        fx.session.view_sound(pos, &Sound::BlockBreak { block: dirt });
        fx.session.view_sound(pos, &Sound::Click);
        fx.session.view_sound(
            pos,
            &Sound::Note {
                instrument: 0,
                pitch: 12,
            },
        );

        match fx.drain().as_slice() {
            [GamePacket::LevelSoundEvent(place), GamePacket::LevelSoundEvent(brk), GamePacket::LevelEvent(click)] =>
            {
                assert_eq!(place.sound_type, SOUND_PLACE);
                assert_eq!(place.extra_data, dirt_id as i32);
                assert_eq!(place.entity_type, ":");
                assert_eq!(brk.sound_type, SOUND_BREAK);
                assert_eq!(click.event_id, SOUND_CLICK);
            }
            other => panic!("unexpected packets: {other:?}"),
        }
    }

    #[test]
    fn block_update_is_network_only() {
        let mut fx = Fixture::new();
        let glass = Block::new("minecraft:glass");
        let pos = BlockPos::new(4, 70, -4);
        fx.session.view_block_update(pos, &glass);

        assert_eq!(
            fx.drain(),
            vec![GamePacket::from(UpdateBlock {
                position: pos,
                runtime_id: fx.ids.block_runtime_id(&glass),
                flags: FLAG_NETWORK,
                layer: 0,
            })]
        );
    }

    #[test]
    fn swing_arm_depends_on_entity_kind() {
        let mut fx = Fixture::new();
        let alex = player(7, "Alex");
        let p = pig(3);
        fx.session.view_entity(&alex);
        fx.session.view_entity(&p);
        fx.drain();

        fx.session
            .view_entity_action(alex.as_ref(), EntityAction::SwingArm);
        fx.session.view_entity_action(p.as_ref(), EntityAction::SwingArm);
        fx.session.view_entity_action(p.as_ref(), EntityAction::Hurt);
        fx.session.view_entity_action(p.as_ref(), EntityAction::Death);

        assert_eq!(
            fx.drain(),
            vec![
                GamePacket::from(Animate::swing_arm(1)),
                GamePacket::from(EntityEvent::new(2, EVENT_ARM_SWING)),
                GamePacket::from(EntityEvent::new(2, EVENT_HURT)),
                GamePacket::from(EntityEvent::new(2, EVENT_DEATH)),
            ]
        );
    }

    #[test]
    fn state_applies_to_self() {
        let mut fx = Fixture::new();
        let me: Arc<dyn Entity> = fx.actor.clone();
        fx.session.view_entity_state(
            me.as_ref(),
            &[EntityState::Sneaking, EntityState::Invisible],
        );

        match fx.drain().as_slice() {
            [GamePacket::SetActorData(data)] => {
                assert_eq!(data.entity_runtime_id, SELF_RUNTIME_ID);
                assert!(data.metadata.has_flag(flag::SNEAKING));
                assert!(data.metadata.has_flag(flag::INVISIBLE));
                assert!(!data.metadata.has_flag(flag::SPRINTING));
                assert!(data.metadata.has_flag(flag::AFFECTED_BY_GRAVITY));
            }
            other => panic!("unexpected packets: {other:?}"),
        }
    }

    #[test]
    fn state_metadata_is_fresh_per_call() {
        let mut fx = Fixture::new();
        let p = pig(3);
        fx.session.view_entity(&p);
        fx.drain();

        fx.session.view_entity_state(p.as_ref(), &[EntityState::OnFire]);
        fx.session.view_entity_state(p.as_ref(), &[]);
        match fx.drain().as_slice() {
            [GamePacket::SetActorData(first), GamePacket::SetActorData(second)] => {
                assert!(first.metadata.has_flag(flag::ON_FIRE));
                assert!(!second.metadata.has_flag(flag::ON_FIRE));
            }
            other => panic!("unexpected packets: {other:?}"),
        }
    }

    #[test]
    fn chunks_use_configured_dimension() {
        let mut fx = Fixture::with_config(crate::config::SessionConfig {
            dimension: 1,
            ..Default::default()
        });
        let mut column = ChunkColumn::new();
        column.sections[2] = Some(SubChunk::new_single(9));
        fx.session.view_chunk(ChunkPos::new(5, -5), &column);

        match fx.drain().as_slice() {
            [GamePacket::LevelChunk(chunk)] => {
                assert_eq!(chunk.dimension_id, 1);
                assert_eq!(chunk.sub_chunk_count, 3);
                assert_eq!((chunk.chunk_x, chunk.chunk_z), (5, -5));
            }
            other => panic!("unexpected packets: {other:?}"),
        }
    }

    #[test]
    fn time_and_dimension() {
        let mut fx = Fixture::new();
        fx.session.view_time(18000);
        fx.session.send_dimension(Dimension::Nether);

        match fx.drain().as_slice() {
            [GamePacket::SetTime(t), GamePacket::ChangeDimension(d)] => {
                assert_eq!(t.time, 18000);
                assert_eq!(d.dimension, DIMENSION_NETHER);
                assert_eq!(d.position, Vec3::ZERO);
                assert!(!d.respawn);
            }
            other => panic!("unexpected packets: {other:?}"),
        }
    }

    #[test]
    fn concurrent_views_assign_distinct_ids() {
        let mut fx = Fixture::new();
        let entities: Vec<Arc<dyn Entity>> = (1..=32).map(pig).collect();

        std::thread::scope(|s| {
            for chunk in entities.chunks(4) {
                let session = &fx.session;
                s.spawn(move || {
                    for e in chunk {
                        session.view_entity(e);
                    }
                });
            }
        });

        let mut ids: Vec<u64> = fx
            .drain()
            .into_iter()
            .filter_map(|p| match p {
                GamePacket::AddActor(a) => Some(a.entity_runtime_id),
                _ => None,
            })
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=32).collect::<Vec<_>>());
    }
}
